//! Skeet headless driver
//!
//! Runs a full game with a simple autopilot on the gun, feeding every frame
//! through a render sink. Usage: `skeet [settings.json]`

use std::f32::consts::FRAC_PI_2;

use skeet::Settings;
use skeet::consts::{MAX_SUBSTEPS, SIM_DT, TICKS_PER_SECOND};
use skeet::render::{self, Hud, RenderItem, RenderKind, RenderSink};
use skeet::sim::{TickInput, World, tick};

/// Display refresh the driver pretends to run at
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after this many simulated seconds
const MAX_SECONDS: u32 = 15 * 60;
/// Aim error (radians) tolerated before pulling the trigger
const AIM_TOLERANCE: f32 = 0.05;
/// Ticks between autopilot shots
const FIRE_COOLDOWN: u32 = 6;

/// Counts what a real backend would have drawn
#[derive(Debug, Default)]
struct CountingSink {
    frames: u64,
    items: u64,
    birds: u64,
    last_hud: Option<Hud>,
}

impl RenderSink for CountingSink {
    fn item(&mut self, item: &RenderItem) {
        self.items += 1;
        if matches!(item.kind, RenderKind::Bird(_)) {
            self.birds += 1;
        }
    }

    fn hud(&mut self, hud: &Hud) {
        self.frames += 1;
        self.last_hud = Some(hud.clone());
    }
}

/// Points the gun at the nearest bird and fires pellets when lined up
#[derive(Debug, Default)]
struct Autopilot {
    cooldown: u32,
}

impl Autopilot {
    fn input(&mut self, world: &World) -> TickInput {
        self.cooldown = self.cooldown.saturating_sub(1);

        let pivot = world.field.gun_pivot();
        let Some(target) = world
            .birds
            .iter()
            .map(|b| b.pos)
            .min_by(|a, b| a.distance_squared(pivot).total_cmp(&b.distance_squared(pivot)))
        else {
            return TickInput::default();
        };

        // Angle above the horizon, measured leftward from the pivot
        let offset = target - pivot;
        let wanted = offset.y.atan2(-offset.x).clamp(0.0, FRAC_PI_2);
        let error = wanted - world.gun.angle();

        let fire = error.abs() < AIM_TOLERANCE && self.cooldown == 0;
        if fire {
            self.cooldown = FIRE_COOLDOWN;
        }

        TickInput {
            rotate_clockwise: error > AIM_TOLERANCE,
            rotate_counterclockwise: error < -AIM_TOLERANCE,
            fire_standard: fire,
            show_reticle: true,
            ..Default::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Skeet (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let mut world = World::new(&settings);
    let mut pilot = Autopilot::default();
    let mut sink = CountingSink::default();
    let max_ticks = u64::from(MAX_SECONDS * TICKS_PER_SECOND);

    let mut accumulator = 0.0;
    while !world.clock.is_game_over() && world.time_ticks < max_ticks {
        accumulator += FRAME_DT;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = pilot.input(&world);
            tick(&mut world, &input);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        render::emit(&world, &mut sink);
    }

    if !world.clock.is_game_over() {
        log::warn!("Stopped after {} ticks without reaching game over", world.time_ticks);
    }

    log::info!(
        "Drew {} frames, {} items ({} birds)",
        sink.frames,
        sink.items,
        sink.birds
    );
    log::info!("{} / {}", world.score, world.hit_ratio);

    let hud = sink.last_hud.unwrap_or_else(|| render::frame(&world).hud);
    match serde_json::to_string_pretty(&hud) {
        Ok(json) => log::info!("Final HUD:\n{}", json),
        Err(e) => log::error!("Failed to serialize HUD: {}", e),
    }
}
