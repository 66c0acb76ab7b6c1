use super::{PageState, Wiring};
use crate::constants::{ACTIVE_CLASS, NAV_MENU_LINK_SELECTOR};
use crate::dom::{self, Listener};
use crate::events::keyboard;
use folio_core::{MenuEvent, MenuState, MenuTransition};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mirror a menu state onto the DOM: `active` on the toggle and the panel,
/// body scroll locked while open.
fn render(page: &PageState, state: MenuState) {
    for el in [&page.hamburger, &page.nav_menu].into_iter().flatten() {
        if state.is_open() {
            dom::add_class(el, ACTIVE_CLASS);
        } else {
            dom::remove_class(el, ACTIVE_CLASS);
        }
    }
    let overflow = if state.scroll_locked() { "hidden" } else { "" };
    _ = page.body.style().set_property("overflow", overflow);
}

fn commit(page: &PageState, transition: MenuTransition, cause: &str) {
    if transition.changed() {
        log::debug!("[menu] {:?} -> {:?} ({cause})", transition.from, transition.to);
        render(page, transition.to);
    }
}

fn close(page: &PageState, reason: MenuEvent) {
    let transition = page.menu.borrow_mut().close(reason);
    commit(page, transition, "close");
}

/// True when `target` lies inside neither the toggle nor the panel.
fn is_outside(page: &PageState, target: Option<web::EventTarget>) -> bool {
    let Some(node) = target.and_then(|t| t.dyn_into::<web::Node>().ok()) else {
        return true;
    };
    ![&page.hamburger, &page.nav_menu]
        .into_iter()
        .flatten()
        .any(|el| el.contains(Some(&node)))
}

pub(crate) fn wire(page: &Rc<PageState>) -> Wiring {
    let (Some(hamburger), Some(_)) = (&page.hamburger, &page.nav_menu) else {
        log::debug!("[menu] no .hamburger/.nav-menu, mobile menu disabled");
        return Wiring::default();
    };
    let mut listeners = Vec::new();

    let p = page.clone();
    listeners.push(Listener::new(hamburger, "click", move |_: web::Event| {
        let transition = p.menu.borrow_mut().toggle();
        commit(&p, transition, "toggle");
    }));

    for link in dom::query_all_doc(&page.document, NAV_MENU_LINK_SELECTOR) {
        let p = page.clone();
        listeners.push(Listener::new(&link, "click", move |_: web::Event| {
            close(&p, MenuEvent::LinkClick);
        }));
    }

    let p = page.clone();
    listeners.push(Listener::new(&page.document, "click", move |ev: web::Event| {
        if is_outside(&p, ev.target()) {
            close(&p, MenuEvent::OutsideClick);
        }
    }));

    let p = page.clone();
    listeners.push(keyboard::on_escape(&page.document, move || {
        close(&p, MenuEvent::Escape);
    }));

    let p = page.clone();
    listeners.push(Listener::new(&page.window, "resize", move |_: web::Event| {
        let transition = p.menu.borrow_mut().resize(dom::viewport_width());
        commit(&p, transition, "resize");
    }));

    Wiring {
        listeners,
        ..Wiring::default()
    }
}
