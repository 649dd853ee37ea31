#![cfg(target_arch = "wasm32")]
use comet_core::{FrameClock, Params, Simulation, Viewport};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod panel;
mod render;

use constants::{CANVAS_ID, PANEL_CONTAINER_ID};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, viewport: &Rc<Cell<Viewport>>) {
    dom::sync_canvas_backing_size(canvas, &viewport.get());

    let canvas_resize = canvas.clone();
    let viewport_resize = viewport.clone();
    let Some(window) = web::window() else {
        return;
    };
    let wired = dom::add_listener(&window, "resize", move |_| {
        let vp = dom::read_viewport();
        viewport_resize.set(vp);
        dom::sync_canvas_backing_size(&canvas_resize, &vp);
        log::debug!("[resize] {}x{} @{}x", vp.width, vp.height, vp.dpr);
    });
    if let Err(e) = wired {
        log::warn!("resize tracking unavailable: {:?}", e);
    }
}

/// Defaults with `?key=value` overrides from the page URL applied on top.
fn load_params(window: &web::Window) -> Params {
    let mut params = Params::default();
    let query = window.location().search().unwrap_or_default();
    for err in params.apply_query(&query) {
        log::warn!("ignoring override: {}", err);
    }
    params
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("comet-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let renderer = render::CanvasRenderer::new(&canvas)?;

    let viewport = Rc::new(Cell::new(dom::read_viewport()));
    wire_canvas_resize(&canvas, &viewport);

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let sim = Rc::new(RefCell::new(Simulation::new(load_params(&window), seed)));

    match dom::element_by_id::<web::Element>(&document, PANEL_CONTAINER_ID) {
        Ok(container) => panel::mount(
            &document,
            panel::PanelWiring {
                container,
                sim: sim.clone(),
                viewport: viewport.clone(),
            },
        )?,
        Err(e) => log::warn!("control panel disabled: {:?}", e),
    }

    let vp = viewport.get();
    log::info!(
        "[init] viewport={}x{} dpr={} seed={}",
        vp.width,
        vp.height,
        vp.dpr,
        seed
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        viewport,
        renderer,
        clock: FrameClock::new(dom::now_ms()),
        render_failed: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
