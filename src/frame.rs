use crate::render::CanvasRenderer;
use comet_core::{FrameClock, Simulation, Viewport};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub viewport: Rc<Cell<Viewport>>,
    pub renderer: CanvasRenderer,
    pub clock: FrameClock,
    pub render_failed: bool,
}

impl FrameContext {
    /// One display refresh: clamp dt, fade, step the comet and tail, draw.
    pub fn frame(&mut self, now_ms: f64) {
        let dt = self.clock.tick(now_ms);
        let viewport = self.viewport.get();

        let mut sim = self.sim.borrow_mut();
        let head = sim.step(dt, &viewport);

        let drawn = self
            .renderer
            .fade(&viewport)
            .and_then(|_| match &head {
                Some(h) => self.renderer.draw_head(h, &sim.params),
                None => Ok(()),
            })
            .and_then(|_| self.renderer.draw_particles(sim.particles()));

        // Log the first failure of a streak instead of every frame
        match drawn {
            Err(e) if !self.render_failed => {
                log::error!("render error: {:?}", e);
                self.render_failed = true;
            }
            Err(_) => {}
            Ok(()) => self.render_failed = false,
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx.borrow_mut().frame(now_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
