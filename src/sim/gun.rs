//! The gun in the bottom-right corner

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bullet::{Bullet, BulletKind};
use super::geometry::Playfield;
use crate::consts::{GUN_FAST_AFTER_TICKS, GUN_FAST_STEP, GUN_SLOW_STEP, GUN_START_ANGLE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gun {
    /// Barrel elevation above the horizon, in [0, pi/2]
    angle: f32,
    /// Consecutive ticks each rotate intent has been held
    clockwise_held: u32,
    counterclockwise_held: u32,
}

impl Default for Gun {
    fn default() -> Self {
        Self {
            angle: GUN_START_ANGLE,
            clockwise_held: 0,
            counterclockwise_held: 0,
        }
    }
}

impl Gun {
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotate the barrel. Clockwise raises it toward vertical. Holding a
    /// direction for a while speeds the rotation up.
    pub fn rotate(&mut self, clockwise: bool, counterclockwise: bool) {
        self.clockwise_held = if clockwise {
            self.clockwise_held.saturating_add(1)
        } else {
            0
        };
        self.counterclockwise_held = if counterclockwise {
            self.counterclockwise_held.saturating_add(1)
        } else {
            0
        };

        if clockwise {
            self.angle = (self.angle + step(self.clockwise_held)).min(FRAC_PI_2);
        }
        if counterclockwise {
            self.angle = (self.angle - step(self.counterclockwise_held)).max(0.0);
        }
    }

    /// Fire the first requested weapon unlocked at `level`
    pub fn fire(
        &self,
        level: u32,
        pellet: bool,
        missile: bool,
        bomb: bool,
        field: &Playfield,
    ) -> Option<Bullet> {
        let unlocked = |kind: BulletKind| kind.unlocked_at().is_some_and(|min| level >= min);

        let kind = if pellet {
            BulletKind::Pellet
        } else if missile && unlocked(BulletKind::Missile) {
            BulletKind::Missile
        } else if bomb && unlocked(BulletKind::Bomb) {
            BulletKind::Bomb
        } else {
            return None;
        };
        Some(Bullet::fire(kind, self.angle, field))
    }

    /// Point on screen the barrel is aimed at, one playfield-width away
    pub fn reticle(&self, field: &Playfield) -> Vec2 {
        let reach = field.width;
        Vec2::new(
            field.width - reach * self.angle.cos(),
            reach * self.angle.sin(),
        )
    }
}

fn step(held_ticks: u32) -> f32 {
    if held_ticks > GUN_FAST_AFTER_TICKS {
        GUN_FAST_STEP
    } else {
        GUN_SLOW_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_accelerates_and_clamps() {
        let mut gun = Gun::default();
        gun.rotate(true, false);
        assert!((gun.angle() - (GUN_START_ANGLE + GUN_SLOW_STEP)).abs() < 1e-5);

        for _ in 0..100 {
            gun.rotate(true, false);
        }
        assert_eq!(gun.angle(), FRAC_PI_2);

        for _ in 0..200 {
            gun.rotate(false, true);
        }
        assert_eq!(gun.angle(), 0.0);
    }

    #[test]
    fn test_fast_step_after_holding() {
        let mut gun = Gun::default();
        for _ in 0..GUN_FAST_AFTER_TICKS {
            gun.rotate(false, true);
        }
        let before = gun.angle();
        gun.rotate(false, true);
        assert!((before - gun.angle() - GUN_FAST_STEP).abs() < 1e-5);

        // Releasing resets the hold counter
        gun.rotate(false, false);
        let before = gun.angle();
        gun.rotate(false, true);
        assert!((before - gun.angle() - GUN_SLOW_STEP).abs() < 1e-5);
    }

    #[test]
    fn test_long_hold_stays_fast() {
        let mut gun = Gun {
            angle: 0.5,
            clockwise_held: u32::MAX,
            counterclockwise_held: u32::MAX,
        };
        gun.rotate(true, false);
        assert_eq!(gun.clockwise_held, u32::MAX);
        assert!((gun.angle() - (0.5 + GUN_FAST_STEP)).abs() < 1e-5);
        gun.rotate(false, true);
        assert_eq!(gun.counterclockwise_held, u32::MAX);
        assert!((gun.angle() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_weapon_unlocks() {
        let field = Playfield::default();
        let gun = Gun::default();
        assert!(gun.fire(1, false, true, false, &field).is_none());
        assert!(gun.fire(1, false, false, true, &field).is_none());
        assert_eq!(
            gun.fire(2, false, true, false, &field).map(|b| b.kind),
            Some(BulletKind::Missile)
        );
        assert!(gun.fire(2, false, false, true, &field).is_none());
        assert_eq!(
            gun.fire(3, false, false, true, &field).map(|b| b.kind),
            Some(BulletKind::Bomb)
        );
        // Pellets take precedence over everything
        assert_eq!(
            gun.fire(4, true, true, true, &field).map(|b| b.kind),
            Some(BulletKind::Pellet)
        );
    }

    #[test]
    fn test_reticle_tracks_angle() {
        let field = Playfield::default();
        let mut gun = Gun::default();
        for _ in 0..100 {
            gun.rotate(true, false);
        }
        let reticle = gun.reticle(&field);
        assert!((reticle.x - field.width).abs() < 1e-3);
        assert!((reticle.y - field.width).abs() < 1e-3);
    }
}
