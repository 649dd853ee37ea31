use crate::comet::HeadPose;
use crate::constants::{
    PARTICLE_ALPHA_SCALE, TINT_BASE, TINT_SPAN, VELOCITY_DAMPING, VELOCITY_INHERIT,
    VERTICAL_SKEW_PER_PX,
};
use crate::params::Params;
use crate::random_range;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub lifespan: f32,
    pub radius: f32,
}

/// Fill colour of a particle as rgb bytes plus alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleStyle {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.age <= self.lifespan
    }

    /// Fraction of life left, 1 at birth and 0 at expiry.
    #[inline]
    pub fn remaining(&self) -> f32 {
        1.0 - self.age / self.lifespan
    }

    pub fn style(&self) -> ParticleStyle {
        let remaining = self.remaining().clamp(0.0, 1.0);
        let tint = TINT_BASE + (TINT_SPAN * remaining).floor() as u8;
        ParticleStyle {
            rgb: [tint, 220, 255],
            alpha: remaining * PARTICLE_ALPHA_SCALE,
        }
    }
}

/// Contiguous pool of live tail particles plus the fractional emission carry.
#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    spawn_accumulator: f32,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn spawn_accumulator(&self) -> f32 {
        self.spawn_accumulator
    }

    /// Emit this frame's share of particles at the head and return how many were added.
    ///
    /// Whole particles are taken from the accumulator; the fractional remainder
    /// carries over to the next frame.
    pub fn emit<R: Rng + ?Sized>(
        &mut self,
        head: &HeadPose,
        dt: f32,
        params: &Params,
        rng: &mut R,
    ) -> usize {
        self.spawn_accumulator += params.emission_rate * dt;
        let count = self.spawn_accumulator.floor();
        self.spawn_accumulator -= count;
        let count = count as usize;

        let head_vel = head.velocity(dt);
        self.particles.reserve(count);
        for _ in 0..count {
            let angle = PI
                + random_range(rng, -params.tail_spread, params.tail_spread)
                + head_vel.y * VERTICAL_SKEW_PER_PX;
            let speed = random_range(rng, params.particle_speed_min, params.particle_speed_max);
            self.particles.push(Particle {
                pos: head.pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed + head_vel * VELOCITY_INHERIT,
                age: 0.0,
                lifespan: random_range(rng, params.particle_life_min, params.particle_life_max),
                radius: random_range(rng, params.particle_radius_min, params.particle_radius_max),
            });
        }
        count
    }

    /// Age, expire and integrate every particle.
    ///
    /// Expired particles are swap-removed, so the order of survivors changes.
    pub fn advance(&mut self, dt: f32) {
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.age += dt;
            if !p.is_alive() {
                self.particles.swap_remove(i);
                continue;
            }
            p.pos += p.vel * dt;
            p.vel *= VELOCITY_DAMPING;
            i += 1;
        }
    }
}
