#![cfg(target_arch = "wasm32")]

use folio_core::{InteractionConfig, MemoryStore, MenuState, PreferenceStore, Theme, THEME_STORAGE_KEY};
use folio_web::{start_loop, InteractionController, LocalStorageStore, LoopControl};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r##"
<nav class="navbar">
  <div class="hamburger"></div>
  <ul class="nav-menu"><li><a href="#about">About</a></li></ul>
  <button class="theme-toggle"></button>
</nav>
<section id="about" class="fade-in"><p class="stagger-item">hi</p></section>
<div class="stats-card"><span class="stat-number" data-target="250">0</span></div>
<p id="outside">elsewhere</p>
"##;

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn setup() -> InteractionController {
    setup_with(InteractionConfig::default())
}

fn setup_with(config: InteractionConfig) -> InteractionController {
    folio_web::teardown();
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(THEME_STORAGE_KEY).unwrap();
    document().body().unwrap().set_inner_html(PAGE);
    InteractionController::init(config).expect("controller init")
}

fn element(selector: &str) -> web_sys::Element {
    document().query_selector(selector).unwrap().unwrap()
}

fn click(selector: &str) {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

fn has_class(selector: &str, class: &str) -> bool {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .class_list()
        .contains(class)
}

fn body_overflow() -> String {
    document()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

fn press_escape() {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    let ev = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&ev).unwrap();
}

#[wasm_bindgen_test]
fn hamburger_opens_and_locks_scroll() {
    let controller = setup();
    click(".hamburger");
    assert_eq!(controller.menu_state(), MenuState::Open);
    assert!(has_class(".hamburger", "active"));
    assert!(has_class(".nav-menu", "active"));
    assert_eq!(body_overflow(), "hidden");
}

#[wasm_bindgen_test]
fn escape_and_outside_click_close_the_menu() {
    let controller = setup();
    click(".hamburger");
    press_escape();
    assert_eq!(controller.menu_state(), MenuState::Closed);
    assert!(!has_class(".nav-menu", "active"));
    assert_eq!(body_overflow(), "");

    click(".hamburger");
    click("#outside");
    assert_eq!(controller.menu_state(), MenuState::Closed);
    assert_eq!(body_overflow(), "");
}

#[wasm_bindgen_test]
fn nav_link_click_closes_the_menu() {
    let controller = setup();
    click(".hamburger");
    click(".nav-menu a");
    assert_eq!(controller.menu_state(), MenuState::Closed);
}

#[wasm_bindgen_test]
fn resize_respects_the_configured_breakpoint() {
    let controller = setup_with(InteractionConfig {
        breakpoint_px: 1.0e6,
        ..InteractionConfig::default()
    });
    click(".hamburger");
    let ev = web_sys::Event::new("resize").unwrap();
    web_sys::window().unwrap().dispatch_event(&ev).unwrap();
    assert_eq!(controller.menu_state(), MenuState::Open);
    assert!(has_class(".nav-menu", "active"));
}

#[wasm_bindgen_test]
fn light_theme_leaves_the_markup_alone_on_init() {
    let controller = setup();
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(element(".theme-toggle").text_content().as_deref(), Some(""));
    assert_eq!(document().body().unwrap().get_attribute("data-theme"), None);
}

#[wasm_bindgen_test]
fn theme_toggle_updates_body_glyph_and_storage() {
    let controller = setup();
    assert_eq!(controller.theme(), Theme::Light);
    click(".theme-toggle");

    let body = document().body().unwrap();
    assert_eq!(body.get_attribute("data-theme").as_deref(), Some("dark"));
    let glyph = document()
        .query_selector(".theme-toggle")
        .unwrap()
        .unwrap()
        .text_content();
    assert_eq!(glyph.as_deref(), Some(Theme::Dark.glyph()));
    let store = LocalStorageStore::from_window(&web_sys::window().unwrap());
    assert_eq!(store.load(THEME_STORAGE_KEY).as_deref(), Some("dark"));

    click(".theme-toggle");
    assert_eq!(body.get_attribute("data-theme"), None);
    assert_eq!(store.load(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn persisted_dark_theme_applies_on_init() {
    folio_web::teardown();
    let mut store = LocalStorageStore::from_window(&web_sys::window().unwrap());
    store.save(THEME_STORAGE_KEY, "dark");
    document().body().unwrap().set_inner_html(PAGE);
    let controller = InteractionController::init(Default::default()).unwrap();
    assert_eq!(controller.theme(), Theme::Dark);
    let body = document().body().unwrap();
    assert_eq!(body.get_attribute("data-theme").as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn dropping_the_controller_removes_listeners() {
    let controller = setup();
    drop(controller);
    click(".hamburger");
    assert!(!has_class(".hamburger", "active"));
    assert!(document().query_selector(".custom-cursor").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_store_is_interchangeable() {
    let mut store = MemoryStore::default();
    store.save(THEME_STORAGE_KEY, "dark");
    assert_eq!(store.load(THEME_STORAGE_KEY).as_deref(), Some("dark"));
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test(async)]
async fn loop_stops_itself() {
    let ticks = Rc::new(Cell::new(0u32));
    let counter = ticks.clone();
    let handle = start_loop(move |_| {
        counter.set(counter.get() + 1);
        if counter.get() >= 3 {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    });
    sleep_ms(300).await;
    assert_eq!(ticks.get(), 3);
    assert!(!handle.is_scheduled());
}

#[wasm_bindgen_test(async)]
async fn stopped_loop_never_ticks() {
    let ticks = Rc::new(Cell::new(0u32));
    let counter = ticks.clone();
    let handle = start_loop(move |_| {
        counter.set(counter.get() + 1);
        LoopControl::Continue
    });
    handle.stop();
    sleep_ms(100).await;
    assert_eq!(ticks.get(), 0);
}

#[wasm_bindgen_test(async)]
async fn counter_runs_once_and_lands_on_target() {
    let _controller = setup_with(InteractionConfig {
        counter_duration_ms: 200.0,
        ..InteractionConfig::default()
    });
    sleep_ms(600).await;
    assert_eq!(element(".stat-number").text_content().as_deref(), Some("250"));

    // Re-entering the viewport must not start a second run.
    element(".stat-number").set_text_content(Some("done"));
    let card = element(".stats-card");
    let body = document().body().unwrap();
    card.remove();
    body.append_child(&card).unwrap();
    card.scroll_into_view();
    sleep_ms(400).await;
    assert_eq!(element(".stat-number").text_content().as_deref(), Some("done"));
}

#[wasm_bindgen_test(async)]
async fn reveal_marks_section_and_stagger_items_visible() {
    let _controller = setup();
    element("#about").scroll_into_view();
    sleep_ms(500).await;
    assert!(has_class("#about", "visible"));
    assert!(has_class(".stagger-item", "visible"));

    // Revealed once; the class is not re-applied after removal.
    element("#about").class_list().remove_1("visible").unwrap();
    element("#about").scroll_into_view();
    sleep_ms(200).await;
    assert!(!has_class("#about", "visible"));
}
