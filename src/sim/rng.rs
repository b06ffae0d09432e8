//! Seeded random stream shared by the spawner and variant behaviors
//!
//! Every random draw in the simulation goes through one `SimRng`, so a fixed
//! seed plus a fixed input stream replays the same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    inner: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this stream was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[min, max]`
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        assert!(min <= max, "empty float range {min}..={max}");
        if min == max {
            return min;
        }
        self.inner.random_range(min..=max)
    }

    /// Uniform integer in `[min, max)`
    pub fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        assert!(min < max, "empty integer range {min}..{max}");
        self.inner.random_range(min..max)
    }

    /// Uniform integer in `[min, max]`
    pub fn range_inclusive_u32(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "empty integer range {min}..={max}");
        self.inner.random_range(min..=max)
    }

    /// Bernoulli trial that succeeds with probability `1 / n`
    pub fn one_in(&mut self, n: u32) -> bool {
        assert!(n > 0, "one_in(0) is not a probability");
        self.range_u32(0, n) == 0
    }
}
