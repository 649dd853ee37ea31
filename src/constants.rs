// Canvas, DOM and styling constants for the web frontend.

// Mount points
pub const CANVAS_ID: &str = "comet-canvas";
pub const PANEL_CONTAINER_ID: &str = "control-panel-container";
pub const PANEL_CONTAINER_CLASS: &str = "control-panel-container";
pub const PANEL_ID: &str = "control-panel";
pub const PANEL_TOGGLE_ID: &str = "control-panel-toggle";
pub const PANEL_TITLE: &str = "Comet Controls";
pub const PANEL_ROW_CLASS: &str = "control-row";
pub const COLLAPSED_CLASS: &str = "is-collapsed";

// Compositing modes
pub const BLEND_NORMAL: &str = "source-over";
pub const BLEND_ADDITIVE: &str = "lighter";

// Background fade: translucent black over last frame leaves a short trail
pub const FADE_RGB: [u8; 3] = [0, 0, 0];
pub const FADE_ALPHA: f32 = 0.28;

// Head glow gradient stops (offset, rgb, alpha multiplier)
pub const GLOW_CENTER_RGB: [u8; 3] = [255, 255, 255];
pub const GLOW_MID_OFFSET: f32 = 0.4;
pub const GLOW_MID_RGB: [u8; 3] = [200, 230, 255];
pub const GLOW_MID_ALPHA: f32 = 0.7;
pub const GLOW_EDGE_RGB: [u8; 3] = [50, 120, 255];
pub const CORE_RGB: [u8; 3] = [255, 255, 255];

#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}
