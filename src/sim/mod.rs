//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each collection)
//! - No rendering or platform dependencies

pub mod bird;
pub mod bullet;
pub mod clock;
pub mod collision;
pub mod effect;
pub mod flyer;
pub mod geometry;
pub mod gun;
pub mod rng;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use bird::{Bird, BirdKind};
pub use bullet::{Bullet, BulletKind};
pub use clock::{GameClock, GamePhase};
pub use collision::{Approach, closest_approach, collides, flyers_collide};
pub use effect::{Effect, Points};
pub use flyer::Flyer;
pub use geometry::Playfield;
pub use gun::Gun;
pub use rng::SimRng;
pub use score::{HitRatio, Score};
pub use spawner::{LEVEL_PLANS, LevelPlan, level_plan};
pub use state::{TickStats, World};
pub use tick::{TickInput, tick};
