#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow precision loss when casting block coordinates to f32 since they stay within screen bounds
    clippy::cast_precision_loss
)]

use bevy_ecs::prelude::*;
use log::{debug, info, trace};
use ratatui::style::Color;

use crate::components::{
    Block, Difficulty, GameState, Input, Player, Position, SessionRng, SessionState, Size,
    bounds_of,
};
use crate::game::{BLOCK_MAX_SIZE, BLOCK_MIN_SIZE, CLEANUP_MARGIN};
use crate::scheduler::{SpawnScheduler, TimerEvent};
use crate::screen::ScreenSize;

/// Spawns a block of side `size` with its bottom edge on the top of the screen.
pub fn spawn_block(world: &mut World, x: f32, size: u32, speed: f32, color: Color) -> Entity {
    let side = size as f32;
    trace!("Spawning block at x={x} size={size} speed={speed}");

    world
        .spawn((
            Block { size, speed, color },
            Position { x, y: -side },
            Size {
                width: side,
                height: side,
            },
        ))
        .id()
}

/// Spawns a block of random size, column and color using the current fall speed.
pub fn spawn_random_block(world: &mut World) -> Entity {
    let screen = *world.resource::<ScreenSize>();
    let speed = world.resource::<Difficulty>().fall_speed;

    let (x, size, color) = {
        let mut rng = world.resource_mut::<SessionRng>();
        let size = rng.0.u32(BLOCK_MIN_SIZE..=BLOCK_MAX_SIZE);
        let x = rng.0.u32(0..=screen.width.saturating_sub(size));
        (x, size, Block::random_color(&mut rng.0))
    };

    spawn_block(world, x as f32, size, speed, color)
}

pub fn player_movement_system(world: &mut World) {
    let input = *world.resource::<Input>();
    let screen = *world.resource::<ScreenSize>();
    let direction = input.direction();

    let mut query = world.query::<(&Player, &mut Position, &Size)>();
    for (player, mut position, size) in query.iter_mut(world) {
        position.x += direction * player.speed;

        // Keep the whole rectangle on screen, even when standing still
        let max_x = (screen.width_f32() - size.width).max(0.0);
        position.x = position.x.clamp(0.0, max_x);
    }
}

pub fn block_fall_system(world: &mut World) {
    let mut query = world.query::<(&Block, &mut Position)>();
    for (block, mut position) in query.iter_mut(world) {
        position.y += block.speed;
    }
}

/// Drains every timer fire due by `now_ms` in chronological order.
pub fn timer_system(world: &mut World, now_ms: u64) {
    loop {
        if world.resource::<GameState>().is_game_over() {
            return;
        }

        let due = world.resource_mut::<SpawnScheduler>().next_due(now_ms);
        let Some((event, fired_at)) = due else {
            return;
        };

        match event {
            TimerEvent::Spawn => {
                spawn_random_block(world);
            }
            TimerEvent::DifficultyUp => increase_difficulty(world, fired_at),
        }
    }
}

fn increase_difficulty(world: &mut World, fired_at: u64) {
    let difficulty = {
        let mut difficulty = world.resource_mut::<Difficulty>();
        difficulty.increase();
        *difficulty
    };

    debug!(
        "Difficulty up: fall speed {:.1}, spawn period {}ms",
        difficulty.fall_speed, difficulty.spawn_period_ms
    );

    world
        .resource_mut::<SpawnScheduler>()
        .reprogram_spawn(difficulty.spawn_period_ms, fired_at);
}

pub fn cleanup_system(world: &mut World) {
    let limit = world.resource::<ScreenSize>().height_f32() + CLEANUP_MARGIN;

    let expired: Vec<Entity> = world
        .query_filtered::<(Entity, &Position), With<Block>>()
        .iter(world)
        .filter(|(_, position)| position.y > limit)
        .map(|(entity, _)| entity)
        .collect();

    for entity in expired {
        trace!("Removing off-screen block {entity:?}");
        world.despawn(entity);
    }
}

pub fn score_system(world: &mut World, now_ms: u64) {
    world.resource_mut::<GameState>().update_score(now_ms);
}

/// Ends the session on the first block overlapping the player. Returns whether one did.
pub fn collision_system(world: &mut World) -> bool {
    let player_bounds = world
        .query_filtered::<(&Position, &Size), With<Player>>()
        .iter(world)
        .next()
        .map(|(position, size)| bounds_of(position, size));

    let Some(player_bounds) = player_bounds else {
        return false;
    };

    let hit = world
        .query_filtered::<(&Position, &Size), With<Block>>()
        .iter(world)
        .any(|(position, size)| bounds_of(position, size).intersects(&player_bounds));

    if hit {
        let mut game_state = world.resource_mut::<GameState>();
        game_state.state = SessionState::GameOver;
        info!("Game over with a score of {}", game_state.score);
    }

    hit
}
