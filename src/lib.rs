#![cfg(target_arch = "wasm32")]
use folio_core::{InteractionConfig, RendererPhase, SceneConfig};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod controller;
mod dom;
mod events;
mod frame;
mod render;
mod scene;

pub use controller::{InteractionController, LocalStorageStore};
pub use frame::{start_loop, LoopControl, LoopHandle};
use scene::SceneRenderer;

/// Both page components. They never talk to each other.
#[derive(Default)]
struct App {
    controller: Option<InteractionController>,
    scene: Option<SceneRenderer>,
    scene_phase: RendererPhase,
}

thread_local! {
    static APP: RefCell<App> = RefCell::new(App::default());
}

fn start_controller() {
    match InteractionController::init(InteractionConfig::default()) {
        Ok(controller) => APP.with(|app| app.borrow_mut().controller = Some(controller)),
        Err(e) => log::error!("[controller] init failed: {:?}", e),
    }
}

fn start_scene() {
    let began = APP.with(|app| app.borrow_mut().scene_phase.begin_init());
    if !began {
        log::debug!("[scene] already started");
        return;
    }
    spawn_local(async {
        let result = SceneRenderer::start(SceneConfig::default()).await;
        // Dropped outside the borrow if teardown won the race.
        let late = APP.with(|app| {
            let mut app = app.borrow_mut();
            match result {
                Ok(renderer) if app.scene_phase == RendererPhase::Initializing => {
                    app.scene_phase.finish_init(true);
                    app.scene = Some(renderer);
                    None
                }
                Ok(renderer) => Some(renderer),
                Err(e) => {
                    log::error!("[scene] init failed, canvas left blank: {:?}", e);
                    app.scene_phase.finish_init(false);
                    None
                }
            }
        });
        if late.is_some() {
            log::info!("[scene] torn down before init finished, discarding");
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
    log::info!("folio-web starting");

    start_controller();
    start_scene();
    Ok(())
}

/// Stop the background scene and release every listener, observer and
/// frame loop the page registered.
#[wasm_bindgen]
pub fn teardown() {
    let (controller, scene) = APP.with(|app| {
        let mut app = app.borrow_mut();
        app.scene_phase.stop();
        (app.controller.take(), app.scene.take())
    });
    if let Some(scene) = &scene {
        scene.stop();
    }
    drop(scene);
    drop(controller);
    log::info!("folio-web torn down");
}

#[wasm_bindgen(js_name = showProjectLinks)]
pub fn show_project_links(project: &str) {
    controller::projects::show_project_links(project);
}
