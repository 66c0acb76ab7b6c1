use crate::dom::Listener;
use web_sys as web;

#[inline]
pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Call `handler` whenever Escape is pressed anywhere in the document.
pub fn on_escape(document: &web::Document, mut handler: impl FnMut() + 'static) -> Listener {
    Listener::new(document, "keydown", move |ev: web::KeyboardEvent| {
        if is_escape(&ev.key()) {
            handler();
        }
    })
}
