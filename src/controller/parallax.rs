use super::{PageState, Wiring};
use crate::constants::HERO_CONTENT_SELECTOR;
use crate::constants::STATS_CARD_SELECTOR;
use crate::dom::{self, Listener};
use folio_core::{parallax_offsets, translate_y};
use std::rc::Rc;
use web_sys as web;

pub(crate) fn wire(page: &Rc<PageState>) -> Wiring {
    let hero = dom::query(&page.document, HERO_CONTENT_SELECTOR);
    let stats = dom::query(&page.document, STATS_CARD_SELECTOR);
    if hero.is_none() && stats.is_none() {
        log::debug!("[parallax] no hero or stats section");
        return Wiring::default();
    }
    let scroll = Listener::new(&page.window, "scroll", move |_: web::Event| {
        let offsets = parallax_offsets(dom::scroll_y());
        if let Some(hero) = &hero {
            dom::set_style(hero, "transform", &translate_y(offsets.hero_px));
        }
        if let Some(stats) = &stats {
            dom::set_style(stats, "transform", &translate_y(offsets.stats_px));
        }
    });
    Wiring {
        listeners: vec![scroll],
        ..Wiring::default()
    }
}
