#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow precision loss when casting block sizes to f32 since they never exceed a few hundred pixels
    clippy::cast_precision_loss
)]

use bevy_ecs::prelude::*;
use ratatui::style::Color;

use crate::game::{
    DIFFICULTY_PERIOD_MS, FALL_SPEED_STEP, INITIAL_FALL_SPEED, INITIAL_SPAWN_PERIOD_MS,
    MIN_SPAWN_PERIOD_MS, PLAYER_BOTTOM_MARGIN, PLAYER_SIZE, PLAYER_SPEED, SPAWN_PERIOD_STEP_MS,
};
use crate::scheduler::SpawnScheduler;
use crate::screen::ScreenSize;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[must_use]
pub fn bounds_of(position: &Position, size: &Size) -> Bounds {
    Bounds::new(position.x, position.y, size.width, size.height)
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    pub speed: f32,
}

impl Player {
    /// Player entity parts, centered horizontally and resting near the bottom edge.
    #[must_use]
    pub fn spawn_bundle(screen: ScreenSize) -> (Player, Position, Size) {
        let position = Position {
            x: (screen.width_f32() / 2.0 - PLAYER_SIZE / 2.0).floor(),
            y: screen.height_f32() - PLAYER_SIZE - PLAYER_BOTTOM_MARGIN,
        };
        (
            Player {
                speed: PLAYER_SPEED,
            },
            position,
            Size {
                width: PLAYER_SIZE,
                height: PLAYER_SIZE,
            },
        )
    }
}

// A falling obstacle. Speed and color are fixed when the block is created.
#[derive(Component, Debug, Clone, Copy)]
pub struct Block {
    pub size: u32,
    pub speed: f32,
    pub color: Color,
}

impl Block {
    #[must_use]
    pub fn random_color(rng: &mut fastrand::Rng) -> Color {
        Color::Rgb(rng.u8(120..=255), rng.u8(40..=200), rng.u8(40..=200))
    }

    #[must_use]
    pub fn side(&self) -> f32 {
        self.size as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    GameOver,
}

#[derive(Debug, Resource, Clone)]
pub struct GameState {
    pub state: SessionState,
    pub score: u64,
    pub started_at_ms: u64,
}

impl GameState {
    #[must_use]
    pub fn new(started_at_ms: u64) -> Self {
        Self {
            state: SessionState::Running,
            score: 0,
            started_at_ms,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Seconds survived, derived from wall-clock time rather than counted frames.
    pub fn update_score(&mut self, now_ms: u64) {
        if self.is_game_over() {
            return;
        }
        self.score = now_ms.saturating_sub(self.started_at_ms) / 1000;
    }
}

// Difficulty curve. Only the difficulty tick handler writes to it.
#[derive(Debug, Resource, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub fall_speed: f32,
    pub spawn_period_ms: u64,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            fall_speed: INITIAL_FALL_SPEED,
            spawn_period_ms: INITIAL_SPAWN_PERIOD_MS,
        }
    }
}

impl Difficulty {
    pub fn increase(&mut self) {
        self.fall_speed += FALL_SPEED_STEP;
        self.spawn_period_ms = self
            .spawn_period_ms
            .saturating_sub(SPAWN_PERIOD_STEP_MS)
            .max(MIN_SPAWN_PERIOD_MS);
    }

    #[must_use]
    pub fn scheduler(&self, now_ms: u64) -> SpawnScheduler {
        SpawnScheduler::new(self.spawn_period_ms, DIFFICULTY_PERIOD_MS, now_ms)
    }
}

// Snapshot of the held movement keys for the current frame
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Input {
    pub left: bool,
    pub right: bool,
}

impl Input {
    #[must_use]
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

#[derive(Resource)]
pub struct SessionRng(pub fastrand::Rng);

impl SessionRng {
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}
