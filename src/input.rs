#![warn(clippy::all, clippy::pedantic)]

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    MoveLeft,
    MoveRight,
    Restart,
    Quit,
}

impl LogicalKey {
    #[must_use]
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Left | KeyCode::Char('a' | 'A') => Some(LogicalKey::MoveLeft),
            KeyCode::Right | KeyCode::Char('d' | 'D') => Some(LogicalKey::MoveRight),
            KeyCode::Char('r' | 'R') => Some(LogicalKey::Restart),
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(LogicalKey::Quit),
            _ => None,
        }
    }

    fn opposite(self) -> Option<Self> {
        match self {
            LogicalKey::MoveLeft => Some(LogicalKey::MoveRight),
            LogicalKey::MoveRight => Some(LogicalKey::MoveLeft),
            _ => None,
        }
    }
}

/// Per-frame view of the player's keys.
pub trait InputSource {
    /// Drains pending platform events into the held-key state.
    fn poll_events(&mut self) -> anyhow::Result<()>;

    fn is_held(&self, key: LogicalKey) -> bool;

    /// Returns true once for each fresh press of `key` since the last call.
    /// Auto-repeat while the key stays down does not count.
    fn take_press(&mut self, key: LogicalKey) -> bool;

    /// Returns true once after the platform asked the program to close.
    fn poll_quit_requested(&mut self) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    since: Instant,
    window: Duration,
}

/// Keyboard state built from crossterm key events.
///
/// Terminals that report key releases give exact held state. Otherwise a
/// fresh press holds the key for `initial_hold`, long enough to cover the
/// keyboard's repeat delay, and each auto-repeat extends it by `repeat_hold`.
#[derive(Debug)]
pub struct TerminalInput {
    held: HashMap<LogicalKey, HeldKey>,
    presses: HashSet<LogicalKey>,
    reports_release: bool,
    initial_hold: Duration,
    repeat_hold: Duration,
    quit_requested: bool,
}

impl TerminalInput {
    #[must_use]
    pub fn new(reports_release: bool, initial_hold: Duration, repeat_hold: Duration) -> Self {
        Self {
            held: HashMap::new(),
            presses: HashSet::new(),
            reports_release,
            initial_hold,
            repeat_hold,
            quit_requested: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        trace!("Key event: {key:?}");

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'C'))
        {
            debug!("Interrupt requested");
            self.quit_requested = true;
            return;
        }

        let Some(logical) = LogicalKey::from_key_code(key.code) else {
            return;
        };

        if key.kind == KeyEventKind::Release {
            self.held.remove(&logical);
            return;
        }

        // Without enhancement flags auto-repeat arrives as Press, so a press
        // on a key that is still held is a repeat
        let fresh = key.kind == KeyEventKind::Press && !self.is_held_at(logical, now);
        if fresh {
            self.presses.insert(logical);
        }

        if !self.reports_release {
            // Without release events the last direction pressed wins
            if let Some(opposite) = logical.opposite() {
                self.held.remove(&opposite);
            }
        }

        let window = if fresh {
            self.initial_hold
        } else {
            self.repeat_hold
        };
        self.held.insert(logical, HeldKey { since: now, window });
    }

    #[must_use]
    pub fn is_held_at(&self, key: LogicalKey, now: Instant) -> bool {
        self.held.get(&key).is_some_and(|held| {
            self.reports_release || now.saturating_duration_since(held.since) < held.window
        })
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> anyhow::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, Instant::now());
            }
        }
        Ok(())
    }

    fn is_held(&self, key: LogicalKey) -> bool {
        self.is_held_at(key, Instant::now())
    }

    fn take_press(&mut self, key: LogicalKey) -> bool {
        self.presses.remove(&key)
    }

    fn poll_quit_requested(&mut self) -> bool {
        std::mem::take(&mut self.quit_requested)
    }
}
