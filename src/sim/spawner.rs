//! Level-driven bird spawning
//!
//! Each level has a bird size, a "never leave the sky empty" rule for its
//! primary bird, and a set of independent per-tick trials. Later levels
//! unlock more variants and use smaller birds.

use super::bird::{Bird, BirdKind};
use super::geometry::Playfield;
use super::rng::SimRng;
use crate::consts::TICKS_PER_SECOND;

/// Chance per tick (1 in N) of forcing a bird onto an empty screen
const EMPTY_SKY_ONE_IN: u32 = 15;

/// One kind of bird a level can launch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdTemplate {
    pub kind: BirdKind,
    pub speed: f32,
    pub points: i32,
}

/// Independent trial: launch `template` with probability 1 / `one_in`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRule {
    pub template: BirdTemplate,
    pub one_in: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelPlan {
    pub bird_radius: f32,
    /// Launched when nothing is on screen
    pub primary: BirdTemplate,
    pub rules: &'static [SpawnRule],
}

const fn template(kind: BirdKind, speed: f32, points: i32) -> BirdTemplate {
    BirdTemplate {
        kind,
        speed,
        points,
    }
}

const fn every(kind: BirdKind, speed: f32, points: i32, one_in: u32) -> SpawnRule {
    SpawnRule {
        template: template(kind, speed, points),
        one_in,
    }
}

const EVERY_4S: u32 = 4 * TICKS_PER_SECOND;
const EVERY_3S: u32 = 3 * TICKS_PER_SECOND;

pub const LEVEL_PLANS: [LevelPlan; 4] = [
    LevelPlan {
        bird_radius: 30.0,
        primary: template(BirdKind::Standard, 7.0, 10),
        rules: &[every(BirdKind::Standard, 7.0, 10, EVERY_4S)],
    },
    LevelPlan {
        bird_radius: 25.0,
        primary: template(BirdKind::Standard, 7.0, 12),
        rules: &[
            every(BirdKind::Standard, 5.0, 12, EVERY_4S),
            every(BirdKind::Sinker, 4.5, 20, EVERY_3S),
        ],
    },
    LevelPlan {
        bird_radius: 20.0,
        primary: template(BirdKind::Standard, 5.0, 15),
        rules: &[
            every(BirdKind::Standard, 5.0, 15, EVERY_4S),
            every(BirdKind::Sinker, 4.0, 22, EVERY_4S),
            every(BirdKind::Floater, 5.0, 15, EVERY_4S),
        ],
    },
    LevelPlan {
        bird_radius: 15.0,
        primary: template(BirdKind::Standard, 4.0, 18),
        rules: &[
            every(BirdKind::Standard, 4.0, 18, EVERY_4S),
            every(BirdKind::Sinker, 3.5, 25, EVERY_4S),
            every(BirdKind::Floater, 4.0, 25, EVERY_4S),
            every(BirdKind::Crazy, 4.5, 30, EVERY_4S),
        ],
    },
];

/// Plan for a 1-based level, if the level exists
pub fn level_plan(level: u32) -> Option<&'static LevelPlan> {
    let index = level.checked_sub(1)?;
    LEVEL_PLANS.get(index as usize)
}

/// Roll this tick's spawns for `level`. `bird_count` is the number of birds
/// currently in the sky.
pub fn spawn(level: u32, bird_count: usize, field: &Playfield, rng: &mut SimRng) -> Vec<Bird> {
    let Some(plan) = level_plan(level) else {
        return Vec::new();
    };

    let mut spawned = Vec::new();
    let mut launch = |t: &BirdTemplate, rng: &mut SimRng| {
        spawned.push(Bird::launch(t.kind, plan.bird_radius, t.speed, t.points, field, rng));
    };

    if bird_count == 0 && rng.one_in(EMPTY_SKY_ONE_IN) {
        launch(&plan.primary, rng);
    }
    for rule in plan.rules {
        if rng.one_in(rule.one_in) {
            launch(&rule.template, rng);
        }
    }

    if !spawned.is_empty() {
        log::debug!("Level {}: spawned {} bird(s)", level, spawned.len());
    }
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_levels_unlock_variants() {
        for (i, plan) in LEVEL_PLANS.iter().enumerate() {
            let kinds: HashSet<BirdKind> = plan.rules.iter().map(|r| r.template.kind).collect();
            assert_eq!(kinds.len(), i + 1);
            assert_eq!(plan.primary.kind, BirdKind::Standard);
        }
        // Birds shrink as levels progress
        let radii: Vec<f32> = LEVEL_PLANS.iter().map(|p| p.bird_radius).collect();
        assert!(radii.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_unknown_levels_spawn_nothing() {
        let field = Playfield::default();
        let mut rng = SimRng::new(0);
        for _ in 0..500 {
            assert!(spawn(0, 0, &field, &mut rng).is_empty());
            assert!(spawn(5, 0, &field, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_empty_sky_fills_quickly() {
        let field = Playfield::default();
        let mut rng = SimRng::new(77);
        // Expected wait is well under a second with an empty sky
        let first = (0..300).find(|_| !spawn(1, 0, &field, &mut rng).is_empty());
        assert!(first.is_some());
    }

    #[test]
    fn test_steady_rate_with_busy_sky() {
        let field = Playfield::default();
        let mut rng = SimRng::new(1234);
        let ticks = 120_000;
        let total: usize = (0..ticks).map(|_| spawn(1, 3, &field, &mut rng).len()).sum();
        // Expect ~1000 birds at 1-in-120; allow generous slack
        assert!((800..1200).contains(&total), "spawned {total}");
    }

    #[test]
    fn test_spawned_birds_use_level_size() {
        let field = Playfield::default();
        let mut rng = SimRng::new(5);
        let mut seen = 0;
        for _ in 0..5000 {
            for bird in spawn(4, 0, &field, &mut rng) {
                assert_eq!(bird.radius, 15.0);
                assert_eq!(bird.pos.x, 0.0);
                seen += 1;
            }
        }
        assert!(seen > 0);
    }
}
