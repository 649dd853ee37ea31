use crate::constants::{
    rgba, BLEND_ADDITIVE, BLEND_NORMAL, CORE_RGB, FADE_ALPHA, FADE_RGB, GLOW_CENTER_RGB,
    GLOW_EDGE_RGB, GLOW_MID_ALPHA, GLOW_MID_OFFSET, GLOW_MID_RGB,
};
use comet_core::{HeadPose, Params, Particle, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Canvas 2D drawing for one frame: fade, head glow, tail.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    /// Reset to logical-pixel coordinates and darken what the last frame left.
    pub fn fade(&self, viewport: &Viewport) -> anyhow::Result<()> {
        let dpr = viewport.dpr;
        self.ctx
            .set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(js_err)?;
        self.ctx
            .set_global_composite_operation(BLEND_NORMAL)
            .map_err(js_err)?;
        self.ctx.set_fill_style_str(&rgba(FADE_RGB, FADE_ALPHA));
        self.ctx
            .fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        Ok(())
    }

    pub fn draw_head(&self, head: &HeadPose, params: &Params) -> anyhow::Result<()> {
        let x = head.pos.x as f64;
        let y = head.pos.y as f64;
        let glow = params.head_glow as f64;
        let alpha = head.alpha;

        let gradient = self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, glow)
            .map_err(js_err)?;
        gradient
            .add_color_stop(0.0, &rgba(GLOW_CENTER_RGB, alpha))
            .map_err(js_err)?;
        gradient
            .add_color_stop(GLOW_MID_OFFSET, &rgba(GLOW_MID_RGB, alpha * GLOW_MID_ALPHA))
            .map_err(js_err)?;
        gradient
            .add_color_stop(1.0, &rgba(GLOW_EDGE_RGB, 0.0))
            .map_err(js_err)?;

        self.ctx
            .set_global_composite_operation(BLEND_ADDITIVE)
            .map_err(js_err)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.fill_circle(x, y, glow)?;

        self.ctx.set_fill_style_str(&rgba(CORE_RGB, alpha));
        self.fill_circle(x, y, params.head_radius as f64)
    }

    pub fn draw_particles(&self, particles: &[Particle]) -> anyhow::Result<()> {
        self.ctx
            .set_global_composite_operation(BLEND_ADDITIVE)
            .map_err(js_err)?;
        for p in particles {
            let style = p.style();
            self.ctx.set_fill_style_str(&rgba(style.rgb, style.alpha));
            self.fill_circle(p.pos.x as f64, p.pos.y as f64, p.radius as f64)?;
        }
        Ok(())
    }

    #[inline]
    fn fill_circle(&self, x: f64, y: f64, radius: f64) -> anyhow::Result<()> {
        self.ctx.begin_path();
        self.ctx.arc(x, y, radius, 0.0, TAU).map_err(js_err)?;
        self.ctx.fill();
        Ok(())
    }
}
