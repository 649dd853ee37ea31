//! Rows shown on the control panel.

use crate::params::{Bounds, ParamKey};

#[derive(Clone, Copy, Debug)]
pub struct ControlDef {
    pub key: ParamKey,
    pub label: &'static str,
}

impl ControlDef {
    pub fn bounds(&self) -> Bounds {
        self.key.bounds()
    }

    /// Text for the live readout next to the slider.
    pub fn format_value(&self, value: f32) -> String {
        format_readout(value, self.bounds().step)
    }
}

pub const PANEL_CONTROLS: [ControlDef; 11] = [
    ControlDef {
        key: ParamKey::HeadSpeed,
        label: "Head speed (px/s)",
    },
    ControlDef {
        key: ParamKey::HeadRadius,
        label: "Head radius (px)",
    },
    ControlDef {
        key: ParamKey::HeadGlow,
        label: "Head glow (px)",
    },
    ControlDef {
        key: ParamKey::ArcHeight,
        label: "Arc height (screen frac)",
    },
    ControlDef {
        key: ParamKey::EmissionRate,
        label: "Emission (particles/s)",
    },
    ControlDef {
        key: ParamKey::TailSpread,
        label: "Tail spread (rad)",
    },
    ControlDef {
        key: ParamKey::ParticleRadiusMin,
        label: "Particle radius min (px)",
    },
    ControlDef {
        key: ParamKey::ParticleRadiusMax,
        label: "Particle radius max (px)",
    },
    ControlDef {
        key: ParamKey::ParticleLifeMin,
        label: "Particle life min (s)",
    },
    ControlDef {
        key: ParamKey::ParticleLifeMax,
        label: "Particle life max (s)",
    },
    ControlDef {
        key: ParamKey::FadeOutStart,
        label: "Head fade start (progress)",
    },
];

/// Whole-step sliders read as integers, fine-step sliders with two decimals.
#[inline]
pub fn format_readout(value: f32, step: f32) -> String {
    if step >= 1.0 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Label for the collapse toggle given the panel's new collapsed state.
#[inline]
pub fn toggle_label(collapsed: bool) -> &'static str {
    if collapsed {
        "Show controls"
    } else {
        "Hide controls"
    }
}
