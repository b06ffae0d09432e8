//! Running score and hit-ratio counters

use std::fmt;

use serde::{Deserialize, Serialize};

/// Running point total. Escaped birds and wasted bullets can push it
/// below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    total: i32,
}

impl Score {
    pub fn adjust(&mut self, delta: i32) {
        self.total += delta;
    }

    pub fn reset(&mut self) {
        self.total = 0;
    }

    pub fn total(&self) -> i32 {
        self.total
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {}", self.total)
    }
}

/// Birds shot versus birds that got away, over the whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitRatio {
    hits: u32,
    misses: u32,
}

impl HitRatio {
    /// `+1` records a hit, `-1` a miss; `0` leaves the ratio alone
    pub fn adjust(&mut self, delta: i32) {
        assert!((-1..=1).contains(&delta), "hit ratio delta out of range: {delta}");
        match delta {
            1 => self.hits += 1,
            -1 => self.misses += 1,
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Whole-number percentage of birds hit, `None` before any bird resolved
    pub fn percent(&self) -> Option<u32> {
        let total = self.hits + self.misses;
        (total > 0).then(|| self.hits * 100 / total)
    }
}

impl fmt::Display for HitRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent() {
            Some(p) => write!(f, "Birds: {}%", p),
            None => write!(f, "Birds: --"),
        }
    }
}
