#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation and sign loss when scaling the display, the fraction is validated to (0, 1]
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use anyhow::Context;
use bevy_ecs::prelude::*;

use crate::config::DisplayConfig;

/// Playfield dimensions in logical pixels, fixed for the lifetime of the program.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scales the detected display (terminal cells times virtual pixels per cell)
    /// down to the configured fraction.
    #[must_use]
    pub fn from_display(columns: u16, rows: u16, display: &DisplayConfig) -> Self {
        let fraction = display.effective_fraction();
        let display_width = f64::from(columns) * f64::from(display.cell_width_px);
        let display_height = f64::from(rows) * f64::from(display.cell_height_px);
        Self {
            width: (display_width * fraction).floor() as u32,
            height: (display_height * fraction).floor() as u32,
        }
    }

    /// Reads the current terminal size; fails when no terminal is attached.
    pub fn detect(display: &DisplayConfig) -> anyhow::Result<Self> {
        let (columns, rows) =
            crossterm::terminal::size().context("failed to query terminal size")?;
        Ok(Self::from_display(columns, rows, display))
    }

    #[must_use]
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    #[must_use]
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}
