#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    cursor::Show,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use dodge_blocks::app::{App, AppResult};
use dodge_blocks::config::{self, Config};
use dodge_blocks::game::FPS;
use dodge_blocks::input::TerminalInput;
use dodge_blocks::render::TerminalRenderer;
use dodge_blocks::screen::ScreenSize;
use dodge_blocks::Clock;
use log::{error, info, warn};
use ratatui::{Terminal, prelude::CrosstermBackend};

fn main() -> AppResult<()> {
    let loaded = config::loader::load_config_from_file();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&config)?;
    info!("Starting Dodge the Blocks");

    match loaded {
        Ok(_) => info!("Configuration loaded successfully"),
        // Continue with default configuration
        Err(e) => error!("Failed to load configuration: {e}"),
    }

    // Screen size is fixed for the whole run
    let screen = ScreenSize::detect(&config.display)?;
    info!("Playfield is {}x{} pixels", screen.width, screen.height);

    // Terminal initialization
    enable_raw_mode().context("failed to enable raw mode")?;
    let reports_release = supports_keyboard_enhancement().unwrap_or(false);

    // Every step after raw mode is enabled must fall through to the restore
    let res = run_in_terminal(screen, &config, reports_release);
    let restored = restore_terminal(reports_release);

    if let Err(err) = &res {
        error!("Game error: {err:?}");
    }
    if let Err(err) = &restored {
        error!("Failed to restore terminal: {err:?}");
    }

    res.and(restored)
}

fn run_in_terminal(screen: ScreenSize, config: &Config, reports_release: bool) -> AppResult<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    } else {
        warn!("Terminal does not report key releases, using hold windows for movement keys");
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("failed to create terminal")?;
    let mut renderer = TerminalRenderer::new(terminal, screen, &config.display);
    let mut input = TerminalInput::new(
        reports_release,
        Duration::from_millis(config.input.initial_hold_ms),
        Duration::from_millis(config.input.key_hold_ms),
    );

    let mut clock = Clock::new(FPS);
    let mut app = App::new(screen, clock.now(), fastrand::u64(..));
    app.run(&mut clock, &mut renderer, &mut input)
}

// Undo every terminal mode change, attempting each step even if an earlier one fails
fn restore_terminal(reports_release: bool) -> AppResult<()> {
    let mut stdout = io::stdout();
    let popped = if reports_release {
        execute!(stdout, PopKeyboardEnhancementFlags).context("failed to pop keyboard flags")
    } else {
        Ok(())
    };
    let raw = disable_raw_mode().context("failed to disable raw mode");
    let screen =
        execute!(stdout, LeaveAlternateScreen, Show).context("failed to leave alternate screen");

    popped.and(raw).and(screen)
}

fn init_logging(config: &Config) -> AppResult<()> {
    // Create log file and redirect stderr to it so logging never draws over the game
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.logging.log_file)
        .with_context(|| format!("failed to create log file {}", config.logging.log_file))?;

    let stderr_fd = io::stderr().as_raw_fd();
    let log_file_fd = log_file.as_raw_fd();

    // Safety: both descriptors are open for the duration of the call
    unsafe {
        libc::dup2(log_file_fd, stderr_fd);
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .format_timestamp(None)
    .format_module_path(false)
    .init();

    Ok(())
}
