//! Mobile navigation menu state machine.

use crate::constants::MOBILE_BREAKPOINT_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    /// Hamburger clicked.
    Toggle,
    /// A link inside the menu was followed.
    LinkClick,
    /// A click landed outside both the menu panel and the hamburger.
    OutsideClick,
    Escape,
    Resize { from: f64, to: f64 },
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Page scroll is locked exactly while the panel is open.
    pub fn scroll_locked(self) -> bool {
        self.is_open()
    }

    /// Apply an event at the default breakpoint.
    pub fn next(self, event: MenuEvent) -> MenuState {
        self.next_at(event, MOBILE_BREAKPOINT_PX)
    }

    /// Apply an event. Every close trigger lands on the same `Closed` state;
    /// closing a closed menu yields `Closed` again.
    pub fn next_at(self, event: MenuEvent, breakpoint_px: f64) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::LinkClick | MenuEvent::OutsideClick | MenuEvent::Escape) => {
                MenuState::Closed
            }
            (MenuState::Open, MenuEvent::Resize { from, to }) => {
                if resize_closes_menu(from, to, breakpoint_px) {
                    MenuState::Closed
                } else {
                    MenuState::Open
                }
            }
            (MenuState::Closed, MenuEvent::Resize { .. }) => MenuState::Closed,
        }
    }
}

/// A resize closes an open menu when it crosses the breakpoint, or when the
/// viewport ends up wider than it.
#[inline]
pub fn resize_closes_menu(from: f64, to: f64, breakpoint_px: f64) -> bool {
    let was_narrow = from <= breakpoint_px;
    let is_narrow = to <= breakpoint_px;
    !is_narrow || was_narrow != is_narrow
}

/// Result of feeding one event to a [`Menu`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuTransition {
    pub from: MenuState,
    pub to: MenuState,
}

impl MenuTransition {
    /// Whether the DOM needs touching at all.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Owned menu state plus the last viewport width seen, so resize events can
/// be expressed as crossings.
#[derive(Clone, Debug)]
pub struct Menu {
    state: MenuState,
    last_width: f64,
    breakpoint_px: f64,
}

impl Menu {
    pub fn new(width: f64) -> Self {
        Self::with_breakpoint(width, MOBILE_BREAKPOINT_PX)
    }

    pub fn with_breakpoint(width: f64, breakpoint_px: f64) -> Self {
        Self {
            state: MenuState::Closed,
            last_width: width,
            breakpoint_px,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn apply(&mut self, event: MenuEvent) -> MenuTransition {
        let from = self.state;
        self.state = from.next_at(event, self.breakpoint_px);
        MenuTransition {
            from,
            to: self.state,
        }
    }

    pub fn toggle(&mut self) -> MenuTransition {
        self.apply(MenuEvent::Toggle)
    }

    /// Single close path shared by link clicks, outside clicks and Escape.
    pub fn close(&mut self, reason: MenuEvent) -> MenuTransition {
        debug_assert!(!matches!(reason, MenuEvent::Toggle));
        self.apply(reason)
    }

    pub fn resize(&mut self, width: f64) -> MenuTransition {
        let from = std::mem::replace(&mut self.last_width, width);
        self.apply(MenuEvent::Resize { from, to: width })
    }
}
