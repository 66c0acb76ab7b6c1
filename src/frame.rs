//! `requestAnimationFrame` loops with an explicit stop handle.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

struct LoopInner {
    request_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopInner {
    fn request_next(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.request_id.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.request_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// Owner of a running loop. Dropping it (or calling [`LoopHandle::stop`])
/// cancels the pending frame and releases the callback.
pub struct LoopHandle {
    inner: Rc<LoopInner>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.inner.cancel();
    }

    pub fn is_scheduled(&self) -> bool {
        self.inner.request_id.get().is_some()
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.inner.cancel();
        // The closure can only be dropped here, never from inside itself.
        self.inner.tick.borrow_mut().take();
    }
}

/// Call `tick` with the frame timestamp (ms, `performance.now()` clock) once
/// per display frame until it returns [`LoopControl::Stop`] or the handle
/// is dropped.
pub fn start_loop(mut tick: impl FnMut(f64) -> LoopControl + 'static) -> LoopHandle {
    let inner = Rc::new(LoopInner {
        request_id: Cell::new(None),
        tick: RefCell::new(None),
    });
    let weak: Weak<LoopInner> = Rc::downgrade(&inner);
    *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        inner.request_id.set(None);
        if tick(ts) == LoopControl::Continue {
            inner.request_next();
        }
    }) as Box<dyn FnMut(f64)>));
    inner.request_next();
    LoopHandle { inner }
}
