use crate::constants::MAX_DEVICE_PIXEL_RATIO;

/// Drawing surface size in logical (CSS) pixels plus the capped pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: width.max(0.0) as f32,
            height: height.max(0.0) as f32,
            dpr: capped_dpr(device_pixel_ratio),
        }
    }

    /// Backing store size in device pixels, at least 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width as f64 * self.dpr) as u32;
        let h = (self.height as f64 * self.dpr) as u32;
        (w.max(1), h.max(1))
    }
}

/// Missing or non-positive ratios count as 1; anything above the cap is capped.
#[inline]
pub fn capped_dpr(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}
