//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world deterministically. The order of
//! the steps below is part of the game's feel; do not reorder them.

use serde::{Deserialize, Serialize};

use super::collision::flyers_collide;
use super::effect::{Effect, Points};
use super::flyer::Flyer;
use super::spawner;
use super::state::{TickStats, World};
use crate::consts::HIT_FRAGMENTS;

/// Player intents for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Raise the barrel / steer missiles clockwise
    pub rotate_clockwise: bool,
    /// Lower the barrel / steer missiles counterclockwise
    pub rotate_counterclockwise: bool,
    /// Fire a pellet
    pub fire_standard: bool,
    /// Fire a missile (level 2+)
    pub fire_missile: bool,
    /// Fire a bomb (level 3+)
    pub fire_bomb: bool,
    /// Draw the aiming reticle
    pub show_reticle: bool,
    /// Start over after game over
    pub restart: bool,
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, input: &TickInput) {
    world.last_tick = TickStats::default();
    interact(world, input);
    animate(world);
}

/// Apply the player's intents before anything moves
fn interact(world: &mut World, input: &TickInput) {
    if world.clock.is_game_over() {
        if input.restart {
            world.restart();
        }
        return;
    }

    world
        .gun
        .rotate(input.rotate_clockwise, input.rotate_counterclockwise);

    if let Some(bullet) = world.gun.fire(
        world.clock.level(),
        input.fire_standard,
        input.fire_missile,
        input.fire_bomb,
        &world.field,
    ) {
        world.bullets.push(bullet);
        world.last_tick.bullets_fired += 1;
    }

    world.show_reticle = input.show_reticle;

    // Only missiles care about steering
    for bullet in &mut world.bullets {
        bullet.steer(input.rotate_clockwise, input.rotate_counterclockwise);
    }
}

fn animate(world: &mut World) {
    if world.clock.is_game_over() {
        return;
    }

    world.time_ticks += 1;
    world.clock.advance();

    // Status screen: wipe the sky, keep the score
    if world.clock.is_status() {
        world.last_tick.birds_removed += world.birds.len();
        world.last_tick.bullets_removed += world.bullets.len();
        world.last_tick.cleared = true;
        world.clear_entities();
        return;
    }
    if world.clock.is_game_over() {
        return;
    }

    spawn(world);
    advance(world);
    detect_hits(world);
    harvest(world);

    world.effects.retain(|e| !e.is_expired());
    world.points.retain(|p| !p.is_expired());
}

fn spawn(world: &mut World) {
    let born = spawner::spawn(
        world.clock.level(),
        world.birds.len(),
        &world.field,
        &mut world.rng,
    );
    world.last_tick.birds_spawned = born.len();
    world.birds.extend(born);
}

fn advance(world: &mut World) {
    for bird in &mut world.birds {
        bird.advance(&world.field, &mut world.rng);
        world.hit_ratio.adjust(if bird.alive { 0 } else { -1 });
    }
    for bullet in &mut world.bullets {
        bullet.advance(&world.field, &mut world.effects);
    }
    for effect in &mut world.effects {
        effect.fly();
    }
    for points in &mut world.points {
        points.update();
    }
}

/// Every live bird against every live bullet, using post-movement state
fn detect_hits(world: &mut World) {
    for bird in &mut world.birds {
        for bullet in &mut world.bullets {
            if !bird.alive || !bullet.alive || !flyers_collide(&*bird, &*bullet) {
                continue;
            }

            for _ in 0..HIT_FRAGMENTS {
                world
                    .effects
                    .push(Effect::fragment(bullet.pos, bullet.vel, &mut world.rng));
            }
            bird.kill();
            bullet.kill();
            world.hit_ratio.adjust(1);
            // The bullet carries the reward; the bird must not score twice
            bullet.value = -bird.points;
            bird.points = 0;
            world.last_tick.hits += 1;

            log::debug!(
                "{:?} hit {:?} at ({:.0}, {:.0})",
                bullet.kind,
                bird.kind,
                bird.pos.x,
                bird.pos.y
            );
        }
    }
}

/// Turn dead birds and bullets into score and pop-ups, then drop them
fn harvest(world: &mut World) {
    for bird in world.birds.iter().filter(|b| !b.alive) {
        if bird.points != 0 {
            world.points.push(Points::new(bird.pos, bird.points));
        }
        world.score.adjust(bird.points);
        world.last_tick.birds_removed += 1;
    }
    world.birds.retain(|b| b.alive);

    let mut debris = Vec::new();
    for bullet in world.bullets.iter().filter(|b| !b.alive) {
        let pieces = bullet.death(&mut world.rng);
        if !pieces.is_empty() {
            log::debug!(
                "{:?} burst into {} pieces at ({:.0}, {:.0})",
                bullet.kind,
                pieces.len(),
                bullet.pos.x,
                bullet.pos.y
            );
        }
        debris.extend(pieces);

        let value = -bullet.value;
        if value != 0 {
            world.points.push(Points::new(bullet.pos, value));
        }
        world.score.adjust(value);
        world.last_tick.bullets_removed += 1;
    }
    world.bullets.retain(|b| b.alive);

    world.last_tick.shrapnel_spawned = debris.len();
    world.bullets.extend(debris);
}
