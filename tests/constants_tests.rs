// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn class_selectors_are_dotted() {
    for sel in [
        NAVBAR_SELECTOR,
        HAMBURGER_SELECTOR,
        NAV_MENU_SELECTOR,
        THEME_TOGGLE_SELECTOR,
        STATS_CARD_SELECTOR,
        STAT_NUMBER_SELECTOR,
        HERO_CONTENT_SELECTOR,
        FEATURE_ICON_SELECTOR,
        PRIMARY_BUTTON_SELECTOR,
        ROLE_TEXT_SELECTOR,
        AVAILABILITY_CARD_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
        assert!(!sel.contains(' '), "{sel} should be a single class");
    }
}

#[test]
fn class_names_are_bare() {
    for class in [
        ACTIVE_CLASS,
        FLOAT_CLASS,
        PULSE_CLASS,
        ANIMATED_GRADIENT_CLASS,
        GLOW_CLASS,
    ] {
        assert!(!class.starts_with('.'));
        assert!(!class.is_empty());
    }
}

#[test]
fn anchor_selector_matches_in_page_links_only() {
    assert_eq!(IN_PAGE_ANCHOR_SELECTOR, "a[href^=\"#\"]");
}

#[test]
fn canvas_id_and_counter_attribute() {
    assert_eq!(SCENE_CANVAS_ID, "three-canvas");
    assert!(COUNTER_TARGET_ATTRIBUTE.starts_with("data-"));
    assert_eq!(NEW_TAB_TARGET, "_blank");
}

#[test]
fn nav_menu_links_are_any_anchor_in_the_menu() {
    assert_eq!(NAV_MENU_LINK_SELECTOR, ".nav-menu a");
    assert!(NAV_MENU_LINK_SELECTOR.starts_with(NAV_MENU_SELECTOR));
}
