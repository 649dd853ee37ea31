use crate::constants::{MAX_FRAME_DT, MIN_FRAME_DT};

/// Clamp a raw elapsed time in seconds to a usable frame step.
///
/// Negative, NaN and very large inputs all land inside
/// [`MIN_FRAME_DT`, `MAX_FRAME_DT`].
#[inline]
pub fn clamp_dt(raw_sec: f64) -> f32 {
    // f64::min/max return the non-NaN operand, so NaN lands on the upper bound
    raw_sec.min(MAX_FRAME_DT as f64).max(MIN_FRAME_DT as f64) as f32
}

/// Turns successive high-resolution timestamps (milliseconds) into frame steps.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last_ms: f64,
}

impl FrameClock {
    pub fn new(start_ms: f64) -> Self {
        Self { last_ms: start_ms }
    }

    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }

    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = clamp_dt((now_ms - self.last_ms) / 1000.0);
        self.last_ms = now_ms;
        dt
    }
}
