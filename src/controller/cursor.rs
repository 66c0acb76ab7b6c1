use super::{PageState, Wiring};
use crate::dom::{self, Listener};
use crate::frame::{self, LoopControl};
use folio_core::{
    cursor_enabled, CursorFollower, CursorStyle, CURSOR_BASE_STYLE, CURSOR_CLASS,
    CURSOR_HOVER_SELECTORS,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn set_hover(cursor: &web::Element, hovering: bool) {
    let style = CursorStyle::for_hover(hovering);
    dom::set_style(cursor, "transform", style.transform);
    dom::set_style(cursor, "background", style.background);
}

pub(crate) fn wire(page: &Rc<PageState>) -> Wiring {
    let cursor = match page.document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("[cursor] could not create element: {:?}", e);
            return Wiring::default();
        }
    };
    cursor.set_class_name(CURSOR_CLASS);
    _ = cursor.set_attribute("style", CURSOR_BASE_STYLE);
    _ = page.body.append_child(&cursor);

    let mut wiring = Wiring {
        elements: vec![cursor.clone()],
        ..Wiring::default()
    };
    if !cursor_enabled(dom::viewport_width(), page.config.breakpoint_px) {
        log::debug!("[cursor] narrow viewport, custom cursor stays hidden");
        return wiring;
    }
    dom::set_style(&cursor, "display", "block");

    let follower = Rc::new(RefCell::new(CursorFollower::new(page.config.cursor_smoothing)));
    let target = follower.clone();
    wiring.listeners.push(Listener::new(
        &page.document,
        "mousemove",
        move |ev: web::MouseEvent| {
            target
                .borrow_mut()
                .set_target(ev.client_x() as f64, ev.client_y() as f64);
        },
    ));

    for el in dom::query_all_doc(&page.document, CURSOR_HOVER_SELECTORS) {
        let c = cursor.clone();
        wiring
            .listeners
            .push(Listener::new(&el, "mouseenter", move |_: web::Event| {
                set_hover(&c, true)
            }));
        let c = cursor.clone();
        wiring
            .listeners
            .push(Listener::new(&el, "mouseleave", move |_: web::Event| {
                set_hover(&c, false)
            }));
    }

    let moving = cursor.clone();
    wiring.loops.push(frame::start_loop(move |_| {
        let (x, y) = follower.borrow_mut().step();
        dom::set_style(&moving, "left", &format!("{x}px"));
        dom::set_style(&moving, "top", &format!("{y}px"));
        LoopControl::Continue
    }));
    wiring
}
