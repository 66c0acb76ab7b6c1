use super::{PageState, Wiring};
use crate::constants::IN_PAGE_ANCHOR_SELECTOR;
use crate::dom::{self, Listener};
use folio_core::constants::SCROLL_PULSE_ANIMATION;
use std::rc::Rc;
use web_sys as web;

/// Smoothly bring `target` to the top of the viewport and replay its
/// entrance pulse.
fn scroll_to(target: &web::Element, pulse_ms: u32) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);

    dom::set_style(target, "animation", SCROLL_PULSE_ANIMATION);
    let target = target.clone();
    dom::set_timeout(pulse_ms, move || dom::set_style(&target, "animation", ""));
}

pub(crate) fn wire(page: &Rc<PageState>) -> Wiring {
    let anchors = dom::query_all_doc(&page.document, IN_PAGE_ANCHOR_SELECTOR);
    let listeners = anchors
        .iter()
        .map(|anchor| {
            let p = page.clone();
            let href = anchor.get_attribute("href").unwrap_or_default();
            Listener::new(anchor, "click", move |ev: web::Event| {
                ev.prevent_default();
                // A bare "#" is not a selector.
                if href.len() < 2 {
                    return;
                }
                match dom::query(&p.document, &href) {
                    Some(target) => scroll_to(&target, p.config.scroll_pulse_ms),
                    None => log::debug!("[scroll] no target for {href}"),
                }
            })
        })
        .collect();
    Wiring {
        listeners,
        ..Wiring::default()
    }
}
