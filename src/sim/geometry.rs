//! Playfield bounds
//!
//! The playfield spans `[0, width) x [0, height)` with the origin at the
//! bottom-left corner. The gun sits in the bottom-right corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(width > 100.0 && height > 100.0, "playfield too small: {width}x{height}");
        Self { width, height }
    }

    /// True once a circle has fully left the playfield
    pub fn is_out_of_bounds(&self, pos: Vec2, radius: f32) -> bool {
        pos.x < -radius
            || pos.x >= self.width + radius
            || pos.y < -radius
            || pos.y >= self.height + radius
    }

    /// Where fired bullets appear (just inside the bottom-right corner)
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.width - 1.0, 1.0)
    }

    /// Pivot of the gun barrel
    pub fn gun_pivot(&self) -> Vec2 {
        Vec2::new(self.width, 0.0)
    }
}
