//! Birds: the targets drifting across the playfield

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::geometry::Playfield;
use super::rng::SimRng;

/// Bird variants, each with its own start band and motion policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BirdKind {
    /// Inertia with slight drag
    Standard,
    /// Heavy drag and anti-gravity; starts low and rises
    Floater,
    /// No drag but gravity; starts high and falls
    Sinker,
    /// Random course changes roughly every half second
    Crazy,
}

impl BirdKind {
    /// Start height as fractions of the playfield height
    fn start_band(self) -> (f32, f32) {
        match self {
            BirdKind::Standard | BirdKind::Crazy => (0.25, 0.75),
            BirdKind::Floater => (0.01, 0.5),
            BirdKind::Sinker => (0.5, 0.95),
        }
    }

    /// Range of the initial vertical speed for a given horizontal speed
    fn climb_range(self, speed: f32) -> (f32, f32) {
        match self {
            BirdKind::Standard | BirdKind::Crazy => (-speed / 5.0, speed / 5.0),
            BirdKind::Floater => (0.0, speed / 3.0),
            BirdKind::Sinker => (-speed / 3.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub kind: BirdKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Awarded when shot; negated when the bird escapes
    pub points: i32,
    pub alive: bool,
}

impl Bird {
    /// Launch a new bird from the left edge
    ///
    /// Draws height, horizontal speed and vertical speed from `rng`, in
    /// that order.
    pub fn launch(
        kind: BirdKind,
        radius: f32,
        speed: f32,
        points: i32,
        field: &Playfield,
        rng: &mut SimRng,
    ) -> Self {
        let (low, high) = kind.start_band();
        let y = rng.range_f32(field.height * low, field.height * high);
        let dx = rng.range_f32(speed - 0.5, speed + 0.5);
        let (dy_min, dy_max) = kind.climb_range(speed);
        let dy = rng.range_f32(dy_min, dy_max);

        Self::new(kind, Vec2::new(0.0, y), Vec2::new(dx, dy), radius, points)
    }

    /// Place a bird explicitly
    pub fn new(kind: BirdKind, pos: Vec2, vel: Vec2, radius: f32, points: i32) -> Self {
        assert!(radius > 0.0, "bird radius must be positive, got {radius}");
        Self {
            kind,
            pos,
            vel,
            radius,
            points,
            alive: true,
        }
    }

    /// Advance one tick. A bird that leaves the playfield dies and its
    /// points turn into a penalty.
    pub fn advance(&mut self, field: &Playfield, rng: &mut SimRng) {
        match self.kind {
            BirdKind::Standard => {
                self.vel *= 0.995;
                self.pos += self.vel;
            }
            BirdKind::Floater => {
                self.vel *= 0.990;
                self.pos += self.vel;
                self.vel.y += 0.05;
            }
            BirdKind::Sinker => {
                self.vel.y -= 0.07;
                self.pos += self.vel;
            }
            BirdKind::Crazy => {
                if rng.one_in(15) {
                    self.vel.y += rng.range_f32(-1.5, 1.5);
                    self.vel.x += rng.range_f32(-1.5, 1.5);
                }
                self.pos += self.vel;
            }
        }

        if field.is_out_of_bounds(self.pos, self.radius) {
            self.kill();
            self.points = -self.points;
        }
    }
}

impl Flyer for Bird {
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
