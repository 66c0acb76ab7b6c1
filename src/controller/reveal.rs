use super::{PageState, Wiring};
use crate::dom::{self, Observer};
use folio_core::{
    stagger_delays, RevealId, RevealTracker, REVEAL_ID_ATTRIBUTE, REVEAL_SELECTORS,
    STAGGER_ITEM_SELECTOR, VISIBLE_CLASS,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn reveal(el: &web::Element, stagger_ms: u32) {
    dom::add_class(el, VISIBLE_CLASS);
    let items = dom::query_all(el, STAGGER_ITEM_SELECTOR);
    for (item, delay) in items.iter().zip(stagger_delays(items.len(), stagger_ms)) {
        let item = item.clone();
        dom::set_timeout(delay, move || dom::add_class(&item, VISIBLE_CLASS));
    }
}

pub(crate) fn wire(page: &Rc<PageState>) -> Wiring {
    let selector = REVEAL_SELECTORS.join(", ");
    let targets = dom::query_all_doc(&page.document, &selector);
    if targets.is_empty() {
        log::debug!("[reveal] nothing to observe");
        return Wiring::default();
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let stagger_ms = page.config.reveal_stagger_ms;
    let handler_tracker = tracker.clone();
    let observer = Observer::new(
        page.config.reveal_threshold,
        page.config.reveal_root_margin,
        move |el, observer| {
            let id = el
                .get_attribute(REVEAL_ID_ATTRIBUTE)
                .and_then(|v| v.parse::<RevealId>().ok());
            let Some(id) = id else {
                return;
            };
            if handler_tracker.borrow_mut().mark_visible(id) {
                reveal(&el, stagger_ms);
            }
            observer.unobserve(&el);
        },
    );
    let observer = match observer {
        Ok(o) => o,
        Err(e) => {
            log::error!("[reveal] IntersectionObserver failed: {:?}", e);
            return Wiring::default();
        }
    };

    for el in &targets {
        let id = tracker.borrow_mut().register();
        _ = el.set_attribute(REVEAL_ID_ATTRIBUTE, &id.to_string());
        observer.observe(el);
    }
    log::debug!("[reveal] observing {} elements", targets.len());

    Wiring {
        observers: vec![observer],
        ..Wiring::default()
    }
}
