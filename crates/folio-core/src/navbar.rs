use crate::constants::{
    NAV_BG_DARK, NAV_BG_DARK_SCROLLED, NAV_BG_LIGHT, NAV_BG_LIGHT_SCROLLED,
    NAV_SCROLL_THRESHOLD_PX,
};
use crate::theme::Theme;

#[inline]
pub fn is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Navbar background for a scroll state and theme.
#[inline]
pub fn navbar_background(scrolled: bool, theme: Theme) -> &'static str {
    match (theme, scrolled) {
        (Theme::Light, false) => NAV_BG_LIGHT,
        (Theme::Light, true) => NAV_BG_LIGHT_SCROLLED,
        (Theme::Dark, false) => NAV_BG_DARK,
        (Theme::Dark, true) => NAV_BG_DARK_SCROLLED,
    }
}

#[inline]
pub fn navbar_background_at(scroll_y: f64, theme: Theme) -> &'static str {
    navbar_background(is_scrolled(scroll_y, NAV_SCROLL_THRESHOLD_PX), theme)
}
