pub mod app;
pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod screen;
pub mod session;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

use std::thread;
use std::time::{Duration, Instant};

/// Frame pacing and wall-clock milliseconds since the clock was created.
#[derive(Debug, Clone)]
pub struct Clock {
    epoch: Instant,
    last_tick: Instant,
    frame: Duration,
}

impl Clock {
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            epoch: now,
            last_tick: now,
            frame: Duration::from_secs(1) / target_fps.max(1),
        }
    }

    /// Sleeps out the rest of the current frame, then returns milliseconds since the previous tick.
    pub fn tick(&mut self) -> u64 {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }

        let now = Instant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        u64::try_from(delta.as_millis()).unwrap_or(u64::MAX)
    }

    #[must_use]
    pub fn now(&self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}
