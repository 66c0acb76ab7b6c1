use crate::dom::{self, Listener};
use folio_core::PointerState;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Keep `pointer` at the normalized position of the mouse or of a single
/// touch. Multi-touch gestures are left alone.
pub fn wire_pointer_tracking(
    window: &web::Window,
    pointer: &Rc<Cell<PointerState>>,
) -> Vec<Listener> {
    let mouse_pointer = pointer.clone();
    let mousemove = Listener::new(window, "mousemove", move |ev: web::MouseEvent| {
        mouse_pointer.set(normalized(ev.client_x() as f64, ev.client_y() as f64));
    });

    let touch_pointer = pointer.clone();
    let touchmove = Listener::passive(window, "touchmove", move |ev: web::TouchEvent| {
        let touches = ev.touches();
        if touches.length() != 1 {
            return;
        }
        if let Some(t) = touches.get(0) {
            touch_pointer.set(normalized(t.client_x() as f64, t.client_y() as f64));
        }
    });

    vec![mousemove, touchmove]
}

#[inline]
fn normalized(client_x: f64, client_y: f64) -> PointerState {
    let (w, h) = dom::viewport_size();
    PointerState::from_client(client_x, client_y, w, h)
}
