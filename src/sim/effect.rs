//! Cosmetic effects and score pop-ups
//!
//! Nothing here collides or affects scoring; effects only fade out.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::SimRng;
use crate::consts::{POINTS_LIFETIME_TICKS, POINTS_RISE};

/// Initial age of trail streaks
const TRAIL_AGE: f32 = 0.5;

/// A fading visual effect. `age` runs from at most 1.0 down to 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Debris from a hit: drifts, shrinks and fades
    Fragment {
        pos: Vec2,
        vel: Vec2,
        size: f32,
        age: f32,
    },
    /// Trail left behind by shrapnel
    Streek { start: Vec2, end: Vec2, age: f32 },
    /// Trail left behind by a missile
    Exhaust { start: Vec2, end: Vec2, age: f32 },
}

impl Effect {
    /// Debris inheriting half the velocity of whatever hit the bird
    pub fn fragment(pos: Vec2, vel: Vec2, rng: &mut SimRng) -> Self {
        let dx = vel.x * 0.5 + rng.range_f32(-6.0, 6.0);
        let dy = vel.y * 0.5 + rng.range_f32(-6.0, 6.0);
        let age = rng.range_f32(0.4, 1.0);
        let size = rng.range_f32(1.0, 2.5);
        Effect::Fragment {
            pos,
            vel: Vec2::new(dx, dy),
            size,
            age,
        }
    }

    /// Segment from `pos` back along `vel`
    pub fn streek(pos: Vec2, vel: Vec2) -> Self {
        Effect::Streek {
            start: pos,
            end: pos - vel,
            age: TRAIL_AGE,
        }
    }

    pub fn exhaust(pos: Vec2, vel: Vec2) -> Self {
        Effect::Exhaust {
            start: pos,
            end: pos - vel,
            age: TRAIL_AGE,
        }
    }

    pub fn age(&self) -> f32 {
        match self {
            Effect::Fragment { age, .. } | Effect::Streek { age, .. } | Effect::Exhaust { age, .. } => {
                *age
            }
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            Effect::Fragment { pos, .. } => *pos,
            Effect::Streek { start, .. } | Effect::Exhaust { start, .. } => *start,
        }
    }

    /// Advance one tick
    pub fn fly(&mut self) {
        match self {
            Effect::Fragment {
                pos,
                vel,
                size,
                age,
            } => {
                *pos += *vel;
                *size *= 0.95;
                *age = (*age - 0.02).max(0.0);
            }
            Effect::Streek { age, .. } => *age = (*age - 0.10).max(0.0),
            Effect::Exhaust { age, .. } => *age = (*age - 0.025).max(0.0),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.age() <= 0.0
    }
}

/// Floating score indicator shown where a bird or bullet was harvested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Points {
    pub pos: Vec2,
    pub value: i32,
    pub ticks_left: u32,
}

impl Points {
    pub fn new(pos: Vec2, value: i32) -> Self {
        Self {
            pos,
            value,
            ticks_left: POINTS_LIFETIME_TICKS,
        }
    }

    pub fn update(&mut self) {
        self.pos.y += POINTS_RISE;
        self.ticks_left = self.ticks_left.saturating_sub(1);
    }

    /// Remaining lifetime in [0, 1], used for fading
    pub fn fade(&self) -> f32 {
        self.ticks_left as f32 / POINTS_LIFETIME_TICKS as f32
    }

    pub fn is_expired(&self) -> bool {
        self.ticks_left == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_ranges() {
        let mut rng = SimRng::new(5);
        let bullet_vel = Vec2::new(-10.0, 10.0);
        for _ in 0..200 {
            let Effect::Fragment { vel, size, age, .. } = Effect::fragment(Vec2::ZERO, bullet_vel, &mut rng)
            else {
                panic!("expected a fragment");
            };
            assert!(vel.x >= -11.0 && vel.x <= 1.0);
            assert!(vel.y >= -1.0 && vel.y <= 11.0);
            assert!((1.0..=2.5).contains(&size));
            assert!((0.4..=1.0).contains(&age));
        }
    }

    #[test]
    fn test_streek_points_backwards() {
        let effect = Effect::streek(Vec2::new(100.0, 100.0), Vec2::new(10.0, 5.0));
        let Effect::Streek { end, .. } = effect else {
            panic!("expected a streek");
        };
        assert_eq!(end, Vec2::new(90.0, 95.0));
    }

    #[test]
    fn test_lifetimes() {
        // Streeks fade in about 5 ticks, exhaust in about 20
        let mut streek = Effect::streek(Vec2::ZERO, Vec2::X);
        let mut exhaust = Effect::exhaust(Vec2::ZERO, Vec2::X);
        let mut streek_ticks = 0;
        while !streek.is_expired() {
            streek.fly();
            streek_ticks += 1;
        }
        let mut exhaust_ticks = 0;
        while !exhaust.is_expired() {
            exhaust.fly();
            exhaust_ticks += 1;
        }
        assert!((5..=6).contains(&streek_ticks));
        assert!((20..=21).contains(&exhaust_ticks));
        assert_eq!(streek.age(), 0.0);
    }

    #[test]
    fn test_age_never_increases() {
        let mut rng = SimRng::new(9);
        let mut effect = Effect::fragment(Vec2::ZERO, Vec2::ZERO, &mut rng);
        let mut last = effect.age();
        while !effect.is_expired() {
            effect.fly();
            assert!(effect.age() < last);
            assert!((0.0..=1.0).contains(&effect.age()));
            last = effect.age();
        }
    }

    #[test]
    fn test_points_rise_and_expire() {
        let mut points = Points::new(Vec2::new(50.0, 50.0), -10);
        for _ in 0..POINTS_LIFETIME_TICKS {
            assert!(!points.is_expired());
            points.update();
        }
        assert!(points.is_expired());
        assert_eq!(points.pos.y, 50.0 + POINTS_RISE * POINTS_LIFETIME_TICKS as f32);
        assert_eq!(points.fade(), 0.0);
    }
}
