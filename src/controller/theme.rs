use super::{navbar, PageState, Wiring};
use crate::constants::THEME_TOGGLE_SELECTOR;
use crate::dom::{self, Listener};
use folio_core::{PreferenceStore, THEME_ATTRIBUTE};
use std::rc::Rc;
use web_sys as web;

/// `localStorage`-backed preference store. Without storage access (private
/// mode, sandboxed frames) reads miss and writes are dropped.
pub struct LocalStorageStore {
    storage: Option<web::Storage>,
}

impl LocalStorageStore {
    pub fn from_window(window: &web::Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("[theme] localStorage unavailable, preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("[theme] could not persist {key}={value}: {:?}", e);
            }
        }
    }
}

/// Push the current theme to the DOM: toggle glyphs, body attribute, navbar.
pub(crate) fn apply(page: &PageState) {
    let theme = page.theme.borrow().theme();
    for toggle in dom::query_all_doc(&page.document, THEME_TOGGLE_SELECTOR) {
        toggle.set_text_content(Some(theme.glyph()));
    }
    if theme.is_dark() {
        _ = page.body.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    } else {
        _ = page.body.remove_attribute(THEME_ATTRIBUTE);
    }
    navbar::refresh(page);
}

pub(crate) fn wire(page: &Rc<PageState>) -> Wiring {
    let toggles = dom::query_all_doc(&page.document, THEME_TOGGLE_SELECTOR);
    if toggles.is_empty() {
        log::debug!("[theme] no .theme-toggle found");
    }
    let listeners = toggles
        .iter()
        .map(|toggle| {
            let p = page.clone();
            Listener::new(toggle, "click", move |_: web::Event| {
                p.theme.borrow_mut().toggle();
                apply(&p);
            })
        })
        .collect();
    Wiring {
        listeners,
        ..Wiring::default()
    }
}
