//! The shared pseudo-random draw stream.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

/// Handle around the run's single generator. Every randomized stage receives
/// it by mutable reference; it is never cloned or reseeded, so all draws of a
/// run form one deterministic stream.
pub struct DrawStream {
    rng: StdRng,
    seed: u64,
}

impl DrawStream {
    /// Seed from an explicit value for a reproducible run.
    pub fn from_seed_value(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the system clock, the default for interactive runs.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed_value(nanos)
    }

    /// The seed this stream was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One uniform draw from the inclusive range
    pub fn draw_in(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.rng.gen_range(range)
    }

    /// One uniform count draw from `[1, upper]`
    pub fn draw_count(&mut self, upper: usize) -> usize {
        self.rng.gen_range(1..=upper)
    }

    /// Uniform in-place permutation
    pub fn shuffle(&mut self, values: &mut [i64]) {
        values.shuffle(&mut self.rng);
    }
}
