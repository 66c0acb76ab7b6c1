//! Synthetic cursor that trails the real pointer.

use crate::constants::{
    CURSOR_HOVER_COLOR, CURSOR_HOVER_TRANSFORM, CURSOR_IDLE_COLOR, CURSOR_SMOOTHING,
};
use crate::easing::approach;

pub const CURSOR_CLASS: &str = "custom-cursor";
pub const CURSOR_HOVER_SELECTORS: &str = "a, button, .btn, .project-card, .stat-box";
pub const CURSOR_BASE_STYLE: &str = "position: fixed; width: 20px; height: 20px; \
    background: var(--primary-yellow); border-radius: 50%; pointer-events: none; \
    z-index: 9999; opacity: 0.7; transition: transform 0.1s ease; display: none;";

/// Only viewports wider than the breakpoint get the custom cursor.
#[inline]
pub fn cursor_enabled(width: f64, breakpoint_px: f64) -> bool {
    width > breakpoint_px
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    pub transform: &'static str,
    pub background: &'static str,
}

impl CursorStyle {
    pub fn for_hover(hovering: bool) -> Self {
        if hovering {
            Self {
                transform: CURSOR_HOVER_TRANSFORM,
                background: CURSOR_HOVER_COLOR,
            }
        } else {
            Self {
                transform: "scale(1)",
                background: CURSOR_IDLE_COLOR,
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CursorFollower {
    pub x: f64,
    pub y: f64,
    target_x: f64,
    target_y: f64,
    smoothing: f64,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CURSOR_SMOOTHING)
    }
}

impl CursorFollower {
    pub fn new(smoothing: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            target_x: 0.0,
            target_y: 0.0,
            smoothing,
        }
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target_x = x;
        self.target_y = y;
    }

    /// Advance one animation frame and return the new position.
    pub fn step(&mut self) -> (f64, f64) {
        self.x = approach(self.x, self.target_x, self.smoothing);
        self.y = approach(self.y, self.target_y, self.smoothing);
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MOBILE_BREAKPOINT_PX;

    #[test]
    fn first_step_covers_a_tenth() {
        let mut c = CursorFollower::default();
        c.set_target(100.0, 50.0);
        let (x, y) = c.step();
        assert!((x - 10.0).abs() < 1e-9);
        assert!((y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn never_overshoots() {
        let mut c = CursorFollower::default();
        c.set_target(300.0, -40.0);
        for _ in 0..500 {
            let (x, y) = c.step();
            assert!(x <= 300.0 && y >= -40.0);
        }
    }

    #[test]
    fn enabled_only_above_breakpoint() {
        assert!(!cursor_enabled(768.0, MOBILE_BREAKPOINT_PX));
        assert!(cursor_enabled(769.0, MOBILE_BREAKPOINT_PX));
        assert!(!cursor_enabled(1000.0, 1200.0));
    }

    #[test]
    fn hover_style_pairs() {
        assert_eq!(CursorStyle::for_hover(true).background, "#ff6b35");
        assert_eq!(CursorStyle::for_hover(false).transform, "scale(1)");
    }
}
