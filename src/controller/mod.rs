//! Page-interaction controller: navbar, menu, theme, reveal animations,
//! counters, anchors, parallax, cursor and decorative effects.
//!
//! Everything the controller registers (listeners, observers, frame loops,
//! the cursor element) is owned by [`InteractionController`] and released
//! when it is dropped.

use crate::dom::{self, Listener, Observer};
use crate::frame::LoopHandle;
use anyhow::anyhow;
use folio_core::{InteractionConfig, Menu, ThemeSwitch};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod counters;
mod cursor;
mod decor;
mod menu;
mod navbar;
mod parallax;
pub mod projects;
mod reveal;
mod scroll;
mod theme;

pub use theme::LocalStorageStore;

/// State shared by the controller's event handlers.
pub(crate) struct PageState {
    pub(crate) window: web::Window,
    pub(crate) document: web::Document,
    pub(crate) body: web::HtmlElement,
    pub(crate) navbar: Option<web::Element>,
    pub(crate) hamburger: Option<web::Element>,
    pub(crate) nav_menu: Option<web::Element>,
    pub(crate) menu: RefCell<Menu>,
    pub(crate) theme: RefCell<ThemeSwitch<LocalStorageStore>>,
    pub(crate) config: InteractionConfig,
    /// Loops started from inside handlers (counters).
    pub(crate) loops: RefCell<Vec<LoopHandle>>,
}

/// Everything a wiring step hands back for the controller to own.
#[derive(Default)]
pub(crate) struct Wiring {
    pub(crate) listeners: Vec<Listener>,
    pub(crate) observers: Vec<Observer>,
    pub(crate) loops: Vec<LoopHandle>,
    pub(crate) elements: Vec<web::Element>,
}

impl Wiring {
    fn absorb(&mut self, other: Wiring) {
        self.listeners.extend(other.listeners);
        self.observers.extend(other.observers);
        self.loops.extend(other.loops);
        self.elements.extend(other.elements);
    }
}

pub struct InteractionController {
    page: Rc<PageState>,
    wiring: Wiring,
}

impl InteractionController {
    pub fn init(config: InteractionConfig) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window.document().ok_or_else(|| anyhow!("no document"))?;
        let body = document.body().ok_or_else(|| anyhow!("no <body>"))?;

        let store = LocalStorageStore::from_window(&window);
        let page = Rc::new(PageState {
            navbar: dom::query(&document, crate::constants::NAVBAR_SELECTOR),
            hamburger: dom::query(&document, crate::constants::HAMBURGER_SELECTOR),
            nav_menu: dom::query(&document, crate::constants::NAV_MENU_SELECTOR),
            menu: RefCell::new(Menu::with_breakpoint(
                dom::viewport_width(),
                config.breakpoint_px,
            )),
            theme: RefCell::new(ThemeSwitch::load(store)),
            config,
            loops: RefCell::new(Vec::new()),
            window,
            document,
            body,
        });

        // A saved dark theme goes on before any handler can run; light is the
        // markup's own state and is left alone.
        if page.theme.borrow().theme().is_dark() {
            theme::apply(&page);
        }

        let mut wiring = Wiring::default();
        wiring.absorb(navbar::wire(&page));
        wiring.absorb(menu::wire(&page));
        wiring.absorb(theme::wire(&page));
        wiring.absorb(reveal::wire(&page));
        wiring.absorb(counters::wire(&page));
        wiring.absorb(scroll::wire(&page));
        wiring.absorb(parallax::wire(&page));
        wiring.absorb(cursor::wire(&page));
        wiring.absorb(decor::wire(&page));

        log::info!(
            "[controller] wired listeners={} observers={} theme={}",
            wiring.listeners.len(),
            wiring.observers.len(),
            page.theme.borrow().theme().as_str()
        );
        Ok(Self { page, wiring })
    }

    pub fn menu_state(&self) -> folio_core::MenuState {
        self.page.menu.borrow().state()
    }

    pub fn theme(&self) -> folio_core::Theme {
        self.page.theme.borrow().theme()
    }
}

impl Drop for InteractionController {
    fn drop(&mut self) {
        self.page.loops.borrow_mut().clear();
        for el in self.wiring.elements.drain(..) {
            el.remove();
        }
        log::info!("[controller] torn down");
    }
}
