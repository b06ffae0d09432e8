//! Bullets: everything the gun can put in the air

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::effect::Effect;
use super::flyer::Flyer;
use super::geometry::Playfield;
use super::rng::SimRng;
use crate::consts::{BOMB_SHRAPNEL, MISSILE_TURN};
use crate::{heading, muzzle_velocity, turn};

/// Bomb fuse length in ticks (two seconds)
const BOMB_FUSE_TICKS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletKind {
    /// Small, fast and cheap
    Pellet,
    /// Slow shell that bursts into shrapnel
    Bomb,
    /// Piece of a detonated bomb; never fired directly
    Shrapnel,
    /// Steerable while in flight
    Missile,
}

impl BulletKind {
    /// (speed, radius, value) for bullets that leave the gun; `None` for
    /// shrapnel, which only bombs produce
    fn launch_profile(self) -> Option<(f32, f32, i32)> {
        match self {
            BulletKind::Pellet => Some((15.0, 1.0, 1)),
            BulletKind::Bomb => Some((10.0, 4.0, 4)),
            BulletKind::Missile => Some((10.0, 1.0, 3)),
            BulletKind::Shrapnel => None,
        }
    }

    /// First level at which the gun may fire this kind
    pub fn unlocked_at(self) -> Option<u32> {
        match self {
            BulletKind::Pellet => Some(1),
            BulletKind::Missile => Some(2),
            BulletKind::Bomb => Some(3),
            BulletKind::Shrapnel => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub kind: BulletKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Points lost if the bullet expires without hitting anything.
    /// Replaced by the negated bird value on a hit.
    pub value: i32,
    /// Ticks until self-destruct, for bombs and shrapnel
    pub fuse: Option<u32>,
    pub alive: bool,
}

impl Bullet {
    /// Fire a new bullet from the muzzle at `angle` radians above the horizon
    ///
    /// Panics for `BulletKind::Shrapnel`: use [`Bullet::shrapnel`].
    pub fn fire(kind: BulletKind, angle: f32, field: &Playfield) -> Self {
        let Some((speed, radius, value)) = kind.launch_profile() else {
            panic!("{kind:?} cannot be fired from the gun; it only comes from detonating bombs");
        };
        let fuse = (kind == BulletKind::Bomb).then_some(BOMB_FUSE_TICKS);
        Self::new(kind, field.muzzle(), muzzle_velocity(angle, speed), radius, value, fuse)
    }

    /// One piece of a detonating bomb: random heading, speed and fuse
    pub fn shrapnel(origin: Vec2, rng: &mut SimRng) -> Self {
        let fuse = rng.range_inclusive_u32(5, 15);
        let direction = rng.range_f32(0.0, 6.2);
        let speed = rng.range_f32(10.0, 15.0);
        Self::new(
            BulletKind::Shrapnel,
            origin,
            heading(direction) * speed,
            3.0,
            0,
            Some(fuse),
        )
    }

    pub fn new(
        kind: BulletKind,
        pos: Vec2,
        vel: Vec2,
        radius: f32,
        value: i32,
        fuse: Option<u32>,
    ) -> Self {
        assert!(radius > 0.0, "bullet radius must be positive, got {radius}");
        Self {
            kind,
            pos,
            vel,
            radius,
            value,
            fuse,
            alive: true,
        }
    }

    /// Advance one tick, appending any trail effects
    pub fn advance(&mut self, field: &Playfield, effects: &mut Vec<Effect>) {
        if let Some(fuse) = self.fuse.as_mut() {
            *fuse = fuse.saturating_sub(1);
            if *fuse == 0 {
                self.kill();
            }
        }

        match self.kind {
            BulletKind::Shrapnel => effects.push(Effect::streek(self.pos, self.vel)),
            BulletKind::Missile => effects.push(Effect::exhaust(self.pos, self.vel)),
            BulletKind::Pellet | BulletKind::Bomb => {}
        }

        self.pos += self.vel;
        if field.is_out_of_bounds(self.pos, self.radius) {
            self.kill();
        }
    }

    /// Apply the player's rotate intents. Only missiles respond.
    pub fn steer(&mut self, clockwise: bool, counterclockwise: bool) {
        if self.kind != BulletKind::Missile {
            return;
        }
        if clockwise {
            self.vel = turn(self.vel, -MISSILE_TURN);
        }
        if counterclockwise {
            self.vel = turn(self.vel, MISSILE_TURN);
        }
    }

    /// Bullets spawned when this one dies. Only bombs leave anything behind.
    pub fn death(&self, rng: &mut SimRng) -> Vec<Bullet> {
        match self.kind {
            BulletKind::Bomb => (0..BOMB_SHRAPNEL)
                .map(|_| Bullet::shrapnel(self.pos, rng))
                .collect(),
            BulletKind::Pellet | BulletKind::Shrapnel | BulletKind::Missile => Vec::new(),
        }
    }
}

impl Flyer for Bullet {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }
}
