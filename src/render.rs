//! Render snapshot
//!
//! Turns a `World` into a flat, backend-agnostic list of things to draw plus
//! the HUD text. The simulation never draws; a backend either consumes a
//! whole `RenderFrame` or implements `RenderSink` and receives items in
//! painter's order (reticle, gun, pop-ups, effects, bullets, birds).

use glam::Vec2;
use serde::Serialize;

use crate::sim::{BirdKind, BulletKind, Effect, GamePhase, World};

/// RGBA color, components in [0, 1]
pub type Color = [f32; 4];

/// Palette
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
    pub const NAVY: Color = [0.0, 0.0, 0.8, 1.0];
    pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
    pub const GOLD: Color = [0.87, 0.87, 0.0, 1.0];
    pub const CROSSHAIR: Color = [0.6, 0.6, 0.6, 1.0];
    pub const GAIN: Color = [0.2, 0.9, 0.2, 1.0];
    pub const LOSS: Color = [0.9, 0.2, 0.2, 1.0];

    /// Backdrop reddens as the levels go by
    pub fn level_background(level: u32) -> Color {
        [(level as f32 * 0.1).min(1.0), 0.0, 0.0, 1.0]
    }

    /// Effects fade to black with age
    pub fn aged(age: f32) -> Color {
        let a = age.clamp(0.0, 1.0);
        [a, a, a, 1.0]
    }
}

/// Length of the gun barrel as drawn
pub const BARREL_LENGTH: f32 = 100.0;
/// Half-width of the reticle crosshair
pub const RETICLE_SIZE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderKind {
    Bird(BirdKind),
    Bullet(BulletKind),
    Fragment,
    Streek,
    Exhaust,
    Points,
    Gun,
    Reticle,
}

/// One drawable thing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    pub kind: RenderKind,
    pub pos: Vec2,
    /// Second endpoint for line-like items (trails, barrel, reticle line)
    pub end: Option<Vec2>,
    /// Radius or size
    pub extent: f32,
    /// 1.0 = fully opaque, fades toward 0
    pub intensity: f32,
    pub color: Color,
    /// Score shown by pop-ups
    pub value: Option<i32>,
}

impl RenderItem {
    fn new(kind: RenderKind, pos: Vec2, extent: f32, color: Color) -> Self {
        Self {
            kind,
            pos,
            end: None,
            extent,
            intensity: 1.0,
            color,
            value: None,
        }
    }

    fn with_end(mut self, end: Vec2) -> Self {
        self.end = Some(end);
        self
    }
}

/// Text and backdrop for the current phase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: String,
    pub clock: String,
    pub hit_ratio: String,
    pub phase: GamePhase,
    pub level: u32,
    /// Centered message on the countdown and game-over screens
    pub status_message: Option<String>,
    pub percent_left: f32,
    pub background: Color,
    /// Countdown sweep color on the status screen (drawn over `background`)
    pub timer_color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub items: Vec<RenderItem>,
    pub hud: Hud,
}

/// A rendering backend that takes items one at a time
pub trait RenderSink {
    fn item(&mut self, item: &RenderItem);
    fn hud(&mut self, hud: &Hud);
}

/// Snapshot everything visible in `world`
pub fn frame(world: &World) -> RenderFrame {
    RenderFrame {
        items: items(world),
        hud: hud(world),
    }
}

/// Stream a snapshot of `world` into `sink`, HUD last
pub fn emit(world: &World, sink: &mut impl RenderSink) {
    let frame = frame(world);
    for item in &frame.items {
        sink.item(item);
    }
    sink.hud(&frame.hud);
}

fn hud(world: &World) -> Hud {
    let clock = &world.clock;
    let level = clock.level();

    let (background, timer_color) = match clock.phase() {
        GamePhase::Playing => (colors::level_background(level), None),
        // The sweep fills with the next level's color over last level's
        GamePhase::Status => (
            colors::level_background(level.saturating_sub(1)),
            Some(colors::level_background(level)),
        ),
        GamePhase::GameOver => (colors::level_background(level), None),
    };

    let status_message = match clock.phase() {
        GamePhase::Playing => None,
        GamePhase::Status | GamePhase::GameOver => Some(clock.to_string()),
    };

    Hud {
        score: world.score.to_string(),
        clock: clock.to_string(),
        hit_ratio: world.hit_ratio.to_string(),
        phase: clock.phase(),
        level,
        status_message,
        percent_left: clock.percent_left(),
        background,
        timer_color,
    }
}

fn items(world: &World) -> Vec<RenderItem> {
    // Status and game-over screens show only the HUD
    if !world.clock.is_playing() {
        return Vec::new();
    }

    let field = &world.field;
    let mut items = Vec::with_capacity(
        2 + world.points.len() + world.effects.len() + world.bullets.len() + world.birds.len(),
    );

    if world.show_reticle {
        let target = world.gun.reticle(field);
        items.push(
            RenderItem::new(RenderKind::Reticle, target, RETICLE_SIZE, colors::CROSSHAIR)
                .with_end(field.gun_pivot()),
        );
    }

    let pivot = field.gun_pivot();
    let barrel = crate::muzzle_velocity(world.gun.angle(), BARREL_LENGTH);
    items.push(RenderItem::new(RenderKind::Gun, pivot, BARREL_LENGTH, colors::WHITE).with_end(pivot + barrel));

    for points in &world.points {
        let color = if points.value >= 0 {
            colors::GAIN
        } else {
            colors::LOSS
        };
        let mut item = RenderItem::new(RenderKind::Points, points.pos, 0.0, color);
        item.intensity = points.fade();
        item.value = Some(points.value);
        items.push(item);
    }

    for effect in &world.effects {
        let color = colors::aged(effect.age());
        let pos = effect.position();
        let item = match *effect {
            Effect::Fragment { size, .. } => RenderItem::new(RenderKind::Fragment, pos, size, color),
            Effect::Streek { end, .. } => {
                RenderItem::new(RenderKind::Streek, pos, 1.0, color).with_end(end)
            }
            Effect::Exhaust { end, .. } => {
                RenderItem::new(RenderKind::Exhaust, pos, 1.0, color).with_end(end)
            }
        };
        items.push(RenderItem {
            intensity: effect.age(),
            ..item
        });
    }

    for bullet in &world.bullets {
        let kind = RenderKind::Bullet(bullet.kind);
        let item = match bullet.kind {
            BulletKind::Pellet => RenderItem::new(kind, bullet.pos, 3.0, colors::YELLOW),
            BulletKind::Bomb => RenderItem::new(kind, bullet.pos, bullet.radius + 2.0, colors::GOLD),
            BulletKind::Shrapnel => RenderItem::new(kind, bullet.pos, bullet.radius, colors::YELLOW),
            // Nose forward, tail one tick behind
            BulletKind::Missile => RenderItem::new(kind, bullet.pos, bullet.radius, colors::YELLOW)
                .with_end(bullet.pos - bullet.vel),
        };
        items.push(item);
    }

    for bird in &world.birds {
        let color = match bird.kind {
            BirdKind::Standard | BirdKind::Crazy => colors::BLUE,
            BirdKind::Floater => colors::WHITE,
            BirdKind::Sinker => colors::NAVY,
        };
        items.push(RenderItem::new(
            RenderKind::Bird(bird.kind),
            bird.pos,
            bird.radius,
            color,
        ));
    }

    items
}
