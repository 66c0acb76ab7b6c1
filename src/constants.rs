/// DOM contract between the page markup and the wasm behavior layer.
///
/// Selectors and class names live here so the markup can be checked against
/// a single list.
// Canvas the background scene draws into
pub const SCENE_CANVAS_ID: &str = "three-canvas";

// Navigation
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_MENU_LINK_SELECTOR: &str = ".nav-menu a";
pub const ACTIVE_CLASS: &str = "active";

// Theme
pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";

// Counters
pub const STATS_CARD_SELECTOR: &str = ".stats-card";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";
pub const COUNTER_TARGET_ATTRIBUTE: &str = "data-target";

// Anchors and parallax
pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const HERO_CONTENT_SELECTOR: &str = ".hero-content";

// Decorative effects
pub const FEATURE_ICON_SELECTOR: &str = ".feature-icon";
pub const FLOAT_CLASS: &str = "float";
pub const PRIMARY_BUTTON_SELECTOR: &str = ".btn-primary";
pub const PULSE_CLASS: &str = "pulse";
pub const ROLE_TEXT_SELECTOR: &str = ".role-text";
pub const ANIMATED_GRADIENT_CLASS: &str = "animated-gradient";
pub const AVAILABILITY_CARD_SELECTOR: &str = ".availability-card";
pub const GLOW_CLASS: &str = "glow";

// Project chooser opens links here
pub const NEW_TAB_TARGET: &str = "_blank";
