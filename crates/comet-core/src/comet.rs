//! The travelling comet head.
//!
//! A comet crosses the viewport once along a half-sine arc, then cools down
//! for `respawn_delay` seconds. The owner replaces an expired comet with a
//! freshly spawned one, so each traversal gets a new duration and base height.

use crate::constants::{
    ARC_DIRECTION, BASE_Y_MAX_FRAC, BASE_Y_MIN_FRAC, DURATION_MARGIN_PX, FADE_DENOM_EPSILON,
    INITIAL_HEAD_Y_FRAC, MIN_TRAVERSAL_SEC, PATH_OVERSHOOT_PX,
};
use crate::params::Params;
use crate::random_range;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CometPhase {
    Traveling,
    CoolingDown,
}

/// Head position for one frame together with where it was on the previous one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadPose {
    pub pos: Vec2,
    pub prev: Vec2,
    pub alpha: f32,
}

impl HeadPose {
    /// Instantaneous head velocity in px/s over a frame of `dt` seconds.
    #[inline]
    pub fn velocity(&self, dt: f32) -> Vec2 {
        (self.pos - self.prev) / dt
    }
}

#[derive(Clone, Debug)]
pub struct Comet {
    progress: f32,
    duration: f32,
    cooldown: f32,
    base_y: f32,
    arc_dir: f32,
    last_pos: Vec2,
}

impl Comet {
    pub fn spawn<R: Rng + ?Sized>(params: &Params, viewport: &Viewport, rng: &mut R) -> Self {
        let comet = Self {
            progress: 0.0,
            duration: traversal_duration(viewport.width, params.head_speed),
            cooldown: params.respawn_delay,
            base_y: viewport.height * random_range(rng, BASE_Y_MIN_FRAC, BASE_Y_MAX_FRAC),
            arc_dir: ARC_DIRECTION,
            last_pos: Vec2::new(-PATH_OVERSHOOT_PX, viewport.height * INITIAL_HEAD_Y_FRAC),
        };
        log::debug!(
            "[comet] spawn duration={:.2}s base_y={:.1}",
            comet.duration,
            comet.base_y
        );
        comet
    }

    pub fn phase(&self) -> CometPhase {
        if self.progress < 1.0 {
            CometPhase::Traveling
        } else {
            CometPhase::CoolingDown
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    pub fn base_y(&self) -> f32 {
        self.base_y
    }

    /// True once a finished traversal has also used up its cooldown.
    pub fn expired(&self) -> bool {
        self.phase() == CometPhase::CoolingDown && self.cooldown <= 0.0
    }

    /// Recompute the traversal time so a speed change applies mid-flight.
    pub fn retime(&mut self, head_speed: f32, width: f32) {
        self.duration = traversal_duration(width, head_speed);
        log::debug!("[comet] retime duration={:.2}s", self.duration);
    }

    /// Advance by one frame.
    ///
    /// Returns the head pose while traveling (including the frame on which the
    /// traversal completes) and `None` while cooling down.
    pub fn advance(&mut self, dt: f32, params: &Params, viewport: &Viewport) -> Option<HeadPose> {
        if self.phase() == CometPhase::CoolingDown {
            self.cooldown -= dt;
            return None;
        }
        self.progress += dt / self.duration;
        let t = self.progress.min(1.0);
        let pos = path_position(t, self.base_y, self.arc_dir, params.arc_height, viewport);
        let pose = HeadPose {
            pos,
            prev: self.last_pos,
            alpha: head_alpha(t, params.fade_out_start),
        };
        self.last_pos = pos;
        Some(pose)
    }
}

/// Seconds needed to cross a viewport `width` px wide at `head_speed` px/s.
#[inline]
pub fn traversal_duration(width: f32, head_speed: f32) -> f32 {
    ((width + DURATION_MARGIN_PX) / head_speed).max(MIN_TRAVERSAL_SEC)
}

/// Head position at clamped progress `t`.
pub fn path_position(
    t: f32,
    base_y: f32,
    arc_dir: f32,
    arc_height: f32,
    viewport: &Viewport,
) -> Vec2 {
    let start_x = -PATH_OVERSHOOT_PX;
    let end_x = viewport.width + PATH_OVERSHOOT_PX;
    let x = start_x + (end_x - start_x) * t;
    let arc = (t * PI).sin() * arc_height * viewport.height * arc_dir;
    Vec2::new(x, base_y + arc)
}

/// Head opacity: fully opaque until `fade_start`, then a linear ramp to zero at t = 1.
#[inline]
pub fn head_alpha(t: f32, fade_start: f32) -> f32 {
    if t < fade_start {
        1.0
    } else {
        (1.0 - (t - fade_start) / (1.0 - fade_start).max(FADE_DENOM_EPSILON)).max(0.0)
    }
}
