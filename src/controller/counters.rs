use super::{PageState, Wiring};
use crate::constants::{COUNTER_TARGET_ATTRIBUTE, STATS_CARD_SELECTOR, STAT_NUMBER_SELECTOR};
use crate::dom::{self, Observer};
use crate::frame::{self, LoopControl};
use folio_core::{parse_counter_target, CounterAnimation, OnceTrigger};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// Any overlap with the viewport starts the counters.
const STATS_THRESHOLD: f64 = 0.0;
const STATS_ROOT_MARGIN: &str = "0px";

struct StatsCard {
    container: web::Element,
    counters: Vec<(web::Element, u64)>,
    trigger: OnceTrigger,
}

/// Read and validate every `.stat-number` under `container`. Bad targets
/// are reported and left out.
fn collect_counters(container: &web::Element) -> Vec<(web::Element, u64)> {
    dom::query_all(container, STAT_NUMBER_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let raw = el.get_attribute(COUNTER_TARGET_ATTRIBUTE);
            match parse_counter_target(raw.as_deref()) {
                Ok(target) => Some((el, target)),
                Err(e) => {
                    log::warn!("[counter] skipped: {e}");
                    None
                }
            }
        })
        .collect()
}

fn run(page: &PageState, counters: Vec<(web::Element, u64)>) {
    let duration = page.config.counter_duration_ms;
    let start = instant::now();
    let animations: Vec<(web::Element, CounterAnimation)> = counters
        .into_iter()
        .map(|(el, target)| (el, CounterAnimation::with_duration(target, start, duration)))
        .collect();
    log::info!("[counter] animating {} counters", animations.len());

    let handle = frame::start_loop(move |now| {
        let mut all_done = true;
        for (el, animation) in &animations {
            let f = animation.sample(now);
            el.set_text_content(Some(&f.value.to_string()));
            dom::set_style(el, "transform", &f.transform());
            dom::set_style(el, "color", &f.color());
            all_done &= f.done;
        }
        if all_done {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    });
    page.loops.borrow_mut().push(handle);
}

pub(crate) fn wire(page: &Rc<PageState>) -> Wiring {
    let cards: Vec<StatsCard> = dom::query_all_doc(&page.document, STATS_CARD_SELECTOR)
        .into_iter()
        .map(|container| StatsCard {
            counters: collect_counters(&container),
            container,
            trigger: OnceTrigger::default(),
        })
        .collect();
    if cards.is_empty() {
        log::debug!("[counter] no .stats-card found");
        return Wiring::default();
    }
    let cards = Rc::new(RefCell::new(cards));

    let p = page.clone();
    let handler_cards = cards.clone();
    let observer = Observer::new(
        STATS_THRESHOLD,
        STATS_ROOT_MARGIN,
        move |el, observer| {
            observer.unobserve(&el);
            let counters = {
                let mut cards = handler_cards.borrow_mut();
                let Some(card) = cards.iter_mut().find(|c| c.container == el) else {
                    return;
                };
                if !card.trigger.fire() {
                    return;
                }
                std::mem::take(&mut card.counters)
            };
            run(&p, counters);
        },
    );
    let observer = match observer {
        Ok(o) => o,
        Err(e) => {
            log::error!("[counter] IntersectionObserver failed: {:?}", e);
            return Wiring::default();
        }
    };
    for card in cards.borrow().iter() {
        observer.observe(&card.container);
    }

    Wiring {
        observers: vec![observer],
        ..Wiring::default()
    }
}
