use super::{PageState, Wiring};
use crate::constants::{
    ANIMATED_GRADIENT_CLASS, AVAILABILITY_CARD_SELECTOR, FEATURE_ICON_SELECTOR, FLOAT_CLASS,
    GLOW_CLASS, PRIMARY_BUTTON_SELECTOR, PULSE_CLASS, ROLE_TEXT_SELECTOR,
};
use crate::dom::{self, Listener};
use folio_core::stagger_delays;
use std::rc::Rc;
use web_sys as web;

/// One-shot decorative classes plus the CTA hover pulse.
pub(crate) fn wire(page: &Rc<PageState>) -> Wiring {
    let icons = dom::query_all_doc(&page.document, FEATURE_ICON_SELECTOR);
    let delays = stagger_delays(icons.len(), page.config.feature_icon_stagger_ms);
    for (icon, delay) in icons.into_iter().zip(delays) {
        dom::set_timeout(delay, move || dom::add_class(&icon, FLOAT_CLASS));
    }

    let mut listeners = Vec::new();
    for button in dom::query_all_doc(&page.document, PRIMARY_BUTTON_SELECTOR) {
        let b = button.clone();
        listeners.push(Listener::new(&button, "mouseenter", move |_: web::Event| {
            dom::add_class(&b, PULSE_CLASS)
        }));
        let b = button.clone();
        listeners.push(Listener::new(&button, "mouseleave", move |_: web::Event| {
            dom::remove_class(&b, PULSE_CLASS)
        }));
    }

    for (selector, class) in [
        (ROLE_TEXT_SELECTOR, ANIMATED_GRADIENT_CLASS),
        (AVAILABILITY_CARD_SELECTOR, GLOW_CLASS),
    ] {
        match dom::query(&page.document, selector) {
            Some(el) => dom::add_class(&el, class),
            None => log::debug!("[decor] {selector} not found"),
        }
    }

    Wiring {
        listeners,
        ..Wiring::default()
    }
}
