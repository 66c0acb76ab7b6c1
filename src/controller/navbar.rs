use super::{PageState, Wiring};
use crate::dom::{self, Listener};
use folio_core::{is_scrolled, navbar_background};
use std::rc::Rc;
use web_sys as web;

/// Shade the navbar for the current scroll offset and theme.
pub(crate) fn refresh(page: &PageState) {
    let Some(navbar) = &page.navbar else {
        return;
    };
    let theme = page.theme.borrow().theme();
    let scrolled = is_scrolled(dom::scroll_y(), page.config.nav_scroll_threshold_px);
    dom::set_style(navbar, "background", navbar_background(scrolled, theme));
}

pub(crate) fn wire(page: &Rc<PageState>) -> Wiring {
    if page.navbar.is_none() {
        log::debug!("[navbar] no .navbar, shading disabled");
        return Wiring::default();
    }
    refresh(page);
    let handler_page = page.clone();
    let scroll = Listener::new(&page.window, "scroll", move |_: web::Event| {
        refresh(&handler_page);
    });
    Wiring {
        listeners: vec![scroll],
        ..Wiring::default()
    }
}
