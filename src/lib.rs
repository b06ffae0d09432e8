//! Skeet - a shooting-gallery arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, game clock)
//! - `render`: Read-only snapshot of the world for a rendering backend
//! - `settings`: Data-driven configuration (seed, playfield, level timing)

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate. All velocities are expressed in pixels per tick.
    pub const TICKS_PER_SECOND: u32 = 30;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 800.0;

    /// Fragments spawned when a bullet hits a bird
    pub const HIT_FRAGMENTS: usize = 25;
    /// Shrapnel released by a detonating bomb
    pub const BOMB_SHRAPNEL: usize = 20;

    /// Gun starts at roughly 45 degrees
    pub const GUN_START_ANGLE: f32 = 0.78;
    pub const GUN_SLOW_STEP: f32 = 0.025;
    pub const GUN_FAST_STEP: f32 = 0.06;
    /// Ticks a rotate key must be held before the gun speeds up
    pub const GUN_FAST_AFTER_TICKS: u32 = 10;
    /// Missile steering per tick (radians)
    pub const MISSILE_TURN: f32 = 0.04;

    /// Score pop-up lifetime and rise speed
    pub const POINTS_LIFETIME_TICKS: u32 = 30;
    pub const POINTS_RISE: f32 = 1.0;
}

/// Unit direction for a heading angle (radians, counterclockwise from +x)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Velocity of a shot leaving the lower-right corner at `angle` above the
/// horizon, travelling leftward.
#[inline]
pub fn muzzle_velocity(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(-speed * angle.cos(), speed * angle.sin())
}

/// Rotate a velocity by `angle` radians (positive = counterclockwise)
#[inline]
pub fn turn(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_muzzle_velocity_quadrant() {
        let v = muzzle_velocity(0.78, 10.0);
        assert!(v.x < 0.0);
        assert!(v.y > 0.0);
        assert!((v.length() - 10.0).abs() < 0.001);

        let up = muzzle_velocity(FRAC_PI_2, 15.0);
        assert!(up.x.abs() < 0.001);
        assert!((up.y - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_turn_preserves_speed() {
        let v = Vec2::new(-7.0, 3.0);
        let turned = turn(v, 0.04);
        assert!((turned.length() - v.length()).abs() < 0.001);
        // Counterclockwise turn of a leftward vector points it further down
        assert!(turned.y < v.y);
    }
}
