//! Continuous (swept-circle) collision detection
//!
//! Birds and bullets both move a long way in one tick: a pellet covers 15px
//! per tick and is only 1px wide, so checking the end-of-tick snapshot would
//! let most shots tunnel straight through. Instead we find the closest the
//! two centers get while both travel along their velocity during the tick.

use glam::Vec2;

use super::flyer::Flyer;

/// Relative speeds below this are treated as no relative motion
const REL_VEL_EPSILON: f32 = 1e-6;

/// Result of a closest-approach query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approach {
    /// Fraction of the tick (clamped to [0, 1]) at which the centers are closest
    pub t: f32,
    /// Center distance at `t`
    pub distance: f32,
}

/// Closest approach of two points moving linearly over one tick
///
/// Squared distance along the tick is `|rel_pos + t * rel_vel|^2`, a convex
/// quadratic in `t`, minimized at `t* = -(rel_pos . rel_vel) / |rel_vel|^2`.
/// `t*` is clamped to the current tick; no lookahead past it.
pub fn closest_approach(pos_a: Vec2, vel_a: Vec2, pos_b: Vec2, vel_b: Vec2) -> Approach {
    let rel_pos = pos_b - pos_a;
    let rel_vel = vel_b - vel_a;
    let speed_sq = rel_vel.length_squared();

    let t = if speed_sq < REL_VEL_EPSILON {
        0.0
    } else {
        (-rel_pos.dot(rel_vel) / speed_sq).clamp(0.0, 1.0)
    };

    Approach {
        t,
        distance: (rel_pos + rel_vel * t).length(),
    }
}

/// Do two moving circles touch at any point during the tick?
pub fn collides(
    pos_a: Vec2,
    vel_a: Vec2,
    radius_a: f32,
    pos_b: Vec2,
    vel_b: Vec2,
    radius_b: f32,
) -> bool {
    closest_approach(pos_a, vel_a, pos_b, vel_b).distance < radius_a + radius_b
}

/// Swept collision between two flyers
pub fn flyers_collide(a: &impl Flyer, b: &impl Flyer) -> bool {
    collides(
        a.position(),
        a.velocity(),
        a.radius(),
        b.position(),
        b.velocity(),
        b.radius(),
    )
}
