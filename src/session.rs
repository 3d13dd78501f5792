#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::info;
use ratatui::style::Color;

use crate::components::{
    Block, Bounds, Difficulty, GameState, Input, Player, Position, SessionRng, SessionState, Size,
    bounds_of,
};
use crate::input::{InputSource, LogicalKey};
use crate::screen::ScreenSize;
use crate::systems;

/// One play-through: the player, the live blocks and the difficulty ramp.
///
/// A session is never reused after game over; restarting builds a new one.
pub struct GameSession {
    pub(crate) world: World,
    player: Entity,
}

impl GameSession {
    #[must_use]
    pub fn new(screen: ScreenSize, now_ms: u64, seed: u64) -> Self {
        let difficulty = Difficulty::default();

        let mut world = World::new();
        world.insert_resource(screen);
        world.insert_resource(difficulty);
        world.insert_resource(difficulty.scheduler(now_ms));
        world.insert_resource(GameState::new(now_ms));
        world.insert_resource(Input::default());
        world.insert_resource(SessionRng::with_seed(seed));

        let player = world.spawn(Player::spawn_bundle(screen)).id();

        info!(
            "New session on a {}x{} screen",
            screen.width, screen.height
        );

        Self { world, player }
    }

    /// Advances one frame. Does nothing once the session is over.
    pub fn update(&mut self, input: &impl InputSource, now_ms: u64) {
        if self.is_game_over() {
            return;
        }

        self.world.insert_resource(Input {
            left: input.is_held(LogicalKey::MoveLeft),
            right: input.is_held(LogicalKey::MoveRight),
        });

        systems::player_movement_system(&mut self.world);
        systems::block_fall_system(&mut self.world);
        systems::timer_system(&mut self.world, now_ms);
        systems::cleanup_system(&mut self.world);
        systems::score_system(&mut self.world, now_ms);
        systems::collision_system(&mut self.world);
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.world.resource::<GameState>().state
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state() == SessionState::GameOver
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.world.resource::<GameState>().score
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        *self.world.resource::<Difficulty>()
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        *self.world.resource::<ScreenSize>()
    }

    #[must_use]
    pub fn player_bounds(&self) -> Bounds {
        match (
            self.world.get::<Position>(self.player),
            self.world.get::<Size>(self.player),
        ) {
            (Some(position), Some(size)) => bounds_of(position, size),
            _ => Bounds::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    #[must_use]
    pub fn block_count(&mut self) -> usize {
        self.world.query::<&Block>().iter(&self.world).count()
    }

    /// Every live block's rectangle and color, for drawing.
    pub fn render_blocks(&mut self) -> Vec<(Bounds, Color)> {
        self.world
            .query::<(&Block, &Position, &Size)>()
            .iter(&self.world)
            .map(|(block, position, size)| (bounds_of(position, size), block.color))
            .collect()
    }
}
