//! World state
//!
//! Everything the simulation owns lives here. Only `tick` mutates it.

use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::bullet::Bullet;
use super::clock::GameClock;
use super::effect::{Effect, Points};
use super::geometry::Playfield;
use super::gun::Gun;
use super::rng::SimRng;
use super::score::{HitRatio, Score};
use super::spawner::LEVEL_PLANS;
use crate::settings::Settings;

/// Bookkeeping for the most recent tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStats {
    /// Birds launched by the spawner
    pub birds_spawned: usize,
    /// Dead birds harvested and removed (shot or escaped)
    pub birds_removed: usize,
    /// Bird/bullet collisions
    pub hits: usize,
    /// Bullets fired from the gun
    pub bullets_fired: usize,
    /// Dead bullets harvested and removed
    pub bullets_removed: usize,
    /// Shrapnel released by detonating bombs
    pub shrapnel_spawned: usize,
    /// Transient entities wiped by entering the status screen
    pub cleared: bool,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub field: Playfield,
    pub clock: GameClock,
    pub score: Score,
    pub hit_ratio: HitRatio,
    pub gun: Gun,
    /// Whether the aiming reticle should be drawn
    pub show_reticle: bool,
    pub birds: Vec<Bird>,
    pub bullets: Vec<Bullet>,
    pub effects: Vec<Effect>,
    pub points: Vec<Points>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub last_tick: TickStats,
    pub(crate) rng: SimRng,
}

impl World {
    pub fn new(settings: &Settings) -> Self {
        let level_ticks = settings.level_ticks();
        assert!(
            level_ticks.len() <= LEVEL_PLANS.len(),
            "{} levels configured but only {} have spawn plans",
            level_ticks.len(),
            LEVEL_PLANS.len()
        );

        log::info!(
            "New world: seed {}, {} levels, {}x{} playfield",
            settings.seed,
            level_ticks.len(),
            settings.playfield_width,
            settings.playfield_height
        );

        Self {
            field: settings.playfield(),
            clock: GameClock::new(settings.status_ticks(), level_ticks),
            score: Score::default(),
            hit_ratio: HitRatio::default(),
            gun: Gun::default(),
            show_reticle: false,
            birds: Vec::new(),
            bullets: Vec::new(),
            effects: Vec::new(),
            points: Vec::new(),
            time_ticks: 0,
            last_tick: TickStats::default(),
            rng: SimRng::new(settings.seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Drop every transient entity; score and clock are untouched
    pub fn clear_entities(&mut self) {
        self.birds.clear();
        self.bullets.clear();
        self.effects.clear();
        self.points.clear();
    }

    /// Restart the run from the level 1 countdown with a clean slate
    pub fn restart(&mut self) {
        self.clock.reset();
        self.score.reset();
        self.hit_ratio.reset();
        log::info!("Game restarted");
    }
}
