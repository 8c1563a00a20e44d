//! Workload generation.
//!
//! Trial inputs are uniformly distributed integers below [`VALUE_CAP`].
//! A single generator is shared by every trial of a run; it is never
//! re-seeded between trials.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound of generated values.
///
/// A quarter of `i32::MAX` keeps `x * 3 + 5` inside `i32`.
pub const VALUE_CAP: i32 = i32::MAX / 4;

/// Source of trial input buffers.
#[derive(Debug)]
pub struct WorkloadGenerator {
    rng: StdRng,
}

impl WorkloadGenerator {
    /// Seed from the thread-local RNG. Runs are not reproducible.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Seed explicitly so every run sees the same inputs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce `size` values in `[0, VALUE_CAP)`.
    pub fn generate(&mut self, size: usize) -> Vec<i32> {
        let mut data = Vec::with_capacity(size);
        for _ in 0..size {
            data.push(self.rng.random_range(0..VALUE_CAP));
        }
        data
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
