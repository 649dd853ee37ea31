pub mod clock;
pub mod comet;
pub mod constants;
pub mod controls;
pub mod params;
pub mod particles;
pub mod sim;
pub mod viewport;

pub use clock::*;
pub use comet::*;
pub use controls::*;
pub use params::*;
pub use particles::*;
pub use sim::*;
pub use viewport::*;

use rand::Rng;

/// Uniform sample in `[min, max)`; tolerates `min > max` instead of panicking.
#[inline]
pub(crate) fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}
