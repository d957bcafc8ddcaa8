//! Spawn context for particle seeding.
//!
//! A small RNG wrapper handed to the reseed loop, one per particle. Seeding
//! mixes the particle index with wall-clock nanos: reproducible within a
//! reseed, different across program runs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::Rgba;

pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: usize,
    /// Total number of particles being spawned.
    pub count: usize,
    rng: SmallRng,
}

impl SpawnContext {
    pub(crate) fn new(index: usize, count: usize) -> Self {
        let seed = index as u64
            ^ std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42);

        Self {
            index,
            count,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[min, max)`. Returns `min` for a degenerate range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Uniform pick from a non-empty color slice.
    pub fn pick_color(&mut self, colors: &[Rgba]) -> Rgba {
        colors[self.rng.gen_range(0..colors.len())]
    }
}
