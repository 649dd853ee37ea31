use crate::comet::{Comet, CometPhase, HeadPose};
use crate::params::{ParamKey, Params};
use crate::particles::{Particle, ParticleSystem};
use crate::viewport::Viewport;
use rand::prelude::*;

/// Everything that changes from frame to frame: params, the live comet and its tail.
pub struct Simulation {
    pub params: Params,
    comet: Option<Comet>,
    particles: ParticleSystem,
    rng: StdRng,
}

impl Simulation {
    pub fn new(params: Params, seed: u64) -> Self {
        Self {
            params,
            comet: None,
            particles: ParticleSystem::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn comet(&self) -> Option<&Comet> {
        self.comet.as_ref()
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.particles()
    }

    /// Run one frame of `dt` seconds and return the head to draw, if any.
    ///
    /// Spawns the first comet lazily, replaces an expired one, emits tail
    /// particles while the head travels, then advances the whole tail.
    pub fn step(&mut self, dt: f32, viewport: &Viewport) -> Option<HeadPose> {
        let params = &self.params;
        let rng = &mut self.rng;
        let comet = self
            .comet
            .get_or_insert_with(|| Comet::spawn(params, viewport, rng));

        let head = match comet.phase() {
            CometPhase::Traveling => {
                let head = comet.advance(dt, params, viewport);
                if let Some(h) = &head {
                    self.particles.emit(h, dt, params, rng);
                }
                head
            }
            CometPhase::CoolingDown => {
                comet.advance(dt, params, viewport);
                if comet.expired() {
                    *comet = Comet::spawn(params, viewport, rng);
                }
                None
            }
        };

        self.particles.advance(dt);
        head
    }

    /// Apply a control edit and return the stored value.
    ///
    /// A head speed change retimes the live comet against `viewport_width`.
    pub fn apply_edit(&mut self, key: ParamKey, raw: f32, viewport_width: f32) -> f32 {
        let stored = self.params.apply_edit(key, raw);
        if key == ParamKey::HeadSpeed {
            if let Some(comet) = self.comet.as_mut() {
                comet.retime(stored, viewport_width);
            }
        }
        stored
    }
}
