use crate::constants::SCENE_CANVAS_ID;
use crate::dom::{self, Listener};
use crate::events::pointer;
use crate::frame::{self, LoopControl, LoopHandle};
use crate::render::GpuState;
use anyhow::anyhow;
use folio_core::constants::MAX_PIXEL_RATIO;
use folio_core::{Density, PointerState, Scene, SceneConfig};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Running background scene. Dropping it stops the frame loop and removes
/// its listeners.
pub struct SceneRenderer {
    frame: LoopHandle,
    _listeners: Vec<Listener>,
}

impl SceneRenderer {
    pub async fn start(config: SceneConfig) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window.document().ok_or_else(|| anyhow!("no document"))?;
        let canvas = document
            .get_element_by_id(SCENE_CANVAS_ID)
            .ok_or_else(|| anyhow!("canvas #{SCENE_CANVAS_ID} not found"))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!("{:?}", e))?;

        let (css_w, css_h) = dom::viewport_size();
        dom::sync_canvas_backing_size(&canvas, css_w, css_h, MAX_PIXEL_RATIO);

        let mut gpu = GpuState::new(&canvas).await?;

        let aspect = if css_h > 0.0 { (css_w / css_h) as f32 } else { 1.0 };
        let scene = Rc::new(RefCell::new(Scene::generate(
            &config,
            Density::for_width(css_w),
            aspect,
            &mut rand::thread_rng(),
        )));
        let pointer = Rc::new(Cell::new(PointerState::default()));

        let mut listeners = pointer::wire_pointer_tracking(&window, &pointer);
        listeners.push(wire_resize(&window, &canvas, &scene));

        let started = Instant::now();
        let frame = frame::start_loop({
            let scene = scene.clone();
            move |_ts| {
                gpu.resize_if_needed(canvas.width(), canvas.height());
                let time_ms = started.elapsed().as_secs_f64() * 1000.0;
                let mut scene = scene.borrow_mut();
                scene.step(pointer.get(), time_ms);
                match gpu.render(&scene) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("[scene] surface lost, reconfiguring");
                        gpu.reconfigure();
                    }
                    Err(e) => log::error!("[scene] frame skipped: {:?}", e),
                }
                LoopControl::Continue
            }
        });
        log::info!(
            "[scene] running with {} objects",
            scene.borrow().object_count()
        );

        Ok(Self {
            frame,
            _listeners: listeners,
        })
    }

    /// Cancel the pending frame. Listeners go away when `self` is dropped.
    pub fn stop(&self) {
        self.frame.stop();
    }
}

fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Listener {
    let canvas = canvas.clone();
    let scene = scene.clone();
    Listener::new(window, "resize", move |_: web::Event| {
        let (w, h) = dom::viewport_size();
        dom::sync_canvas_backing_size(&canvas, w, h, MAX_PIXEL_RATIO);
        scene.borrow_mut().resize(w, h);
    })
}
