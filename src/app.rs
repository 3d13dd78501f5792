#![warn(clippy::all, clippy::pedantic)]

use log::{debug, info};

use crate::Clock;
use crate::components::SessionState;
use crate::input::{InputSource, LogicalKey};
use crate::render::Renderer;
use crate::screen::ScreenSize;
use crate::session::GameSession;
use crate::ui;

pub type AppResult<T> = anyhow::Result<T>;

/// Runs sessions back to back until the player quits.
pub struct App {
    pub session: GameSession,
    pub screen: ScreenSize,
    pub should_quit: bool,
    pub sessions_started: u32,
    rng: fastrand::Rng,
}

impl App {
    #[must_use]
    pub fn new(screen: ScreenSize, now_ms: u64, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let session = GameSession::new(screen, now_ms, rng.u64(..));

        Self {
            session,
            screen,
            should_quit: false,
            sessions_started: 1,
            rng,
        }
    }

    /// Throws away the current session and starts a fresh one.
    pub fn restart(&mut self, now_ms: u64) {
        debug!(
            "Restarting after a final score of {}",
            self.session.score()
        );
        self.session = GameSession::new(self.screen, now_ms, self.rng.u64(..));
        self.sessions_started += 1;
    }

    /// Handles quit and restart requests, then advances the session by one frame.
    pub fn on_tick<I: InputSource>(&mut self, input: &mut I, now_ms: u64) {
        if input.poll_quit_requested() || input.is_held(LogicalKey::Quit) {
            self.should_quit = true;
            return;
        }

        // Consumed every frame so a press made while running never carries over
        let restart_pressed = input.take_press(LogicalKey::Restart);

        match self.session.state() {
            SessionState::Running => self.session.update(&*input, now_ms),
            SessionState::GameOver => {
                if restart_pressed {
                    self.restart(now_ms);
                }
            }
        }
    }

    pub fn run<R: Renderer, I: InputSource>(
        &mut self,
        clock: &mut Clock,
        renderer: &mut R,
        input: &mut I,
    ) -> AppResult<()> {
        loop {
            clock.tick();
            input.poll_events()?;

            self.on_tick(input, clock.now());
            if self.should_quit {
                info!(
                    "Quitting after {} session(s), last score {}",
                    self.sessions_started,
                    self.session.score()
                );
                return Ok(());
            }

            ui::render(renderer, &mut self.session)?;
        }
    }
}
