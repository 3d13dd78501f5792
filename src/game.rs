#![warn(clippy::all, clippy::pedantic)]

// Frame pacing
pub const FPS: u32 = 60;

// Player
pub const PLAYER_SIZE: f32 = 50.0;
pub const PLAYER_SPEED: f32 = 7.0;
pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0; // Gap between the player and the bottom edge

// Blocks (side length in logical pixels, inclusive range)
pub const BLOCK_MIN_SIZE: u32 = 30;
pub const BLOCK_MAX_SIZE: u32 = 80;
pub const CLEANUP_MARGIN: f32 = 200.0; // Blocks are dropped once their top passes screen height + this

// Difficulty ramp
pub const INITIAL_FALL_SPEED: f32 = 4.0;
pub const FALL_SPEED_STEP: f32 = 0.4;
pub const INITIAL_SPAWN_PERIOD_MS: u64 = 700;
pub const SPAWN_PERIOD_STEP_MS: u64 = 40;
pub const MIN_SPAWN_PERIOD_MS: u64 = 180;
pub const DIFFICULTY_PERIOD_MS: u64 = 5000;
