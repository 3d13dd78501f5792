#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Spawn,
    DifficultyUp,
}

/// A timer that fires every `period_ms`, measured from when it was last programmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicTimer {
    period_ms: u64,
    next_fire_ms: u64,
}

impl PeriodicTimer {
    #[must_use]
    pub fn new(period_ms: u64, now_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_fire_ms: now_ms + period_ms,
        }
    }

    /// Restart the timer with a new period; the previous phase is discarded.
    pub fn reprogram(&mut self, period_ms: u64, now_ms: u64) {
        *self = Self::new(period_ms, now_ms);
    }

    #[must_use]
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    #[must_use]
    pub fn next_fire_ms(&self) -> u64 {
        self.next_fire_ms
    }

    fn is_due(&self, now_ms: u64) -> bool {
        self.next_fire_ms <= now_ms
    }

    fn advance(&mut self) -> u64 {
        let fired_at = self.next_fire_ms;
        self.next_fire_ms += self.period_ms;
        fired_at
    }
}

// Spawn and difficulty timers, driven by wall-clock milliseconds and queried once per frame
#[derive(Resource, Debug, Clone)]
pub struct SpawnScheduler {
    spawn: PeriodicTimer,
    difficulty: PeriodicTimer,
}

impl SpawnScheduler {
    #[must_use]
    pub fn new(spawn_period_ms: u64, difficulty_period_ms: u64, now_ms: u64) -> Self {
        Self {
            spawn: PeriodicTimer::new(spawn_period_ms, now_ms),
            difficulty: PeriodicTimer::new(difficulty_period_ms, now_ms),
        }
    }

    /// Pops the earliest timer fire due at or before `now_ms`, returning the event
    /// and the time it fired. Spawn wins ties with the difficulty timer.
    pub fn next_due(&mut self, now_ms: u64) -> Option<(TimerEvent, u64)> {
        let spawn_due = self.spawn.is_due(now_ms);
        let difficulty_due = self.difficulty.is_due(now_ms);

        match (spawn_due, difficulty_due) {
            (false, false) => None,
            (true, false) => Some((TimerEvent::Spawn, self.spawn.advance())),
            (false, true) => Some((TimerEvent::DifficultyUp, self.difficulty.advance())),
            (true, true) => {
                if self.spawn.next_fire_ms() <= self.difficulty.next_fire_ms() {
                    Some((TimerEvent::Spawn, self.spawn.advance()))
                } else {
                    Some((TimerEvent::DifficultyUp, self.difficulty.advance()))
                }
            }
        }
    }

    /// Takes effect from `at_ms`: the next spawn fires one new period later.
    pub fn reprogram_spawn(&mut self, period_ms: u64, at_ms: u64) {
        self.spawn.reprogram(period_ms, at_ms);
    }

    #[must_use]
    pub fn spawn_timer(&self) -> &PeriodicTimer {
        &self.spawn
    }

    #[must_use]
    pub fn difficulty_timer(&self) -> &PeriodicTimer {
        &self.difficulty
    }
}
