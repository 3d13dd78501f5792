#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation and sign loss when mapping pixels to cells, spans are clamped to the playfield first
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::Rect,
    prelude::*,
    widgets::{Block, Borders},
};

use crate::components::Bounds;
use crate::config::DisplayConfig;
use crate::screen::ScreenSize;

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Normal,
    Large,
}

/// A 2D surface that accepts colored rectangles and text in logical pixels.
pub trait Renderer {
    fn screen_size(&self) -> ScreenSize;
    fn draw_rect(&mut self, bounds: Bounds, color: Color);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: FontSize, color: Color);
    /// Flushes everything drawn since the last call to the display.
    fn present(&mut self) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
enum DrawCommand {
    Rect {
        bounds: Bounds,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: FontSize,
        color: Color,
    },
}

// Pixel-to-cell mapping for one frame
#[derive(Debug, Clone, Copy)]
struct CellGrid {
    area: Rect,
    cell_width: f32,
    cell_height: f32,
}

impl CellGrid {
    fn columns(&self, x: f32, width: f32) -> Option<(u16, u16)> {
        cell_span(x, width, self.cell_width, self.area.width)
    }

    fn rows(&self, y: f32, height: f32) -> Option<(u16, u16)> {
        cell_span(y, height, self.cell_height, self.area.height)
    }

    fn fill(&self, buf: &mut Buffer, bounds: Bounds, color: Color) {
        let (Some((first_col, end_col)), Some((first_row, end_row))) = (
            self.columns(bounds.x, bounds.width),
            self.rows(bounds.y, bounds.height),
        ) else {
            return;
        };

        for row in first_row..end_row {
            for col in first_col..end_col {
                if let Some(cell) = buf.cell_mut((self.area.x + col, self.area.y + row)) {
                    cell.set_symbol("█");
                    cell.set_fg(color);
                    cell.set_bg(BACKGROUND);
                }
            }
        }
    }

    fn text(&self, buf: &mut Buffer, text: &str, x: f32, y: f32, style: Style) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let col = (x / self.cell_width).floor() as u16;
        let row = (y / self.cell_height).floor() as u16;
        if col >= self.area.width || row >= self.area.height {
            return;
        }

        let max_width = usize::from(self.area.width - col);
        buf.set_stringn(
            self.area.x + col,
            self.area.y + row,
            text,
            max_width,
            style,
        );
    }
}

// Cells in [first, end) whose span overlaps [start, start + len), clipped to [0, limit)
fn cell_span(start: f32, len: f32, cell: f32, limit: u16) -> Option<(u16, u16)> {
    let first = (start / cell).floor().max(0.0);
    let end = ((start + len) / cell).ceil().min(f32::from(limit));
    if end <= first {
        None
    } else {
        Some((first as u16, end as u16))
    }
}

/// Centers a bordered playfield of `columns`×`rows` cells in `area`.
#[must_use]
pub fn playfield_area(area: Rect, columns: u16, rows: u16) -> Rect {
    let width = columns.saturating_add(2).min(area.width);
    let height = rows.saturating_add(2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Renders the playfield into a ratatui terminal, one terminal cell per
/// `cell_width_px`×`cell_height_px` block of logical pixels.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    screen: ScreenSize,
    cell_width: f32,
    cell_height: f32,
    commands: Vec<DrawCommand>,
}

impl<B: Backend> TerminalRenderer<B> {
    #[must_use]
    pub fn new(terminal: Terminal<B>, screen: ScreenSize, display: &DisplayConfig) -> Self {
        Self {
            terminal,
            screen,
            cell_width: f32::from(display.cell_width_px.max(1)),
            cell_height: f32::from(display.cell_height_px.max(1)),
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn playfield_cells(&self) -> (u16, u16) {
        let columns = (self.screen.width_f32() / self.cell_width).ceil();
        let rows = (self.screen.height_f32() / self.cell_height).ceil();
        (
            columns.min(f32::from(u16::MAX)) as u16,
            rows.min(f32::from(u16::MAX)) as u16,
        )
    }

    fn draw_frame(f: &mut Frame, grid_size: (u16, u16), cell: (f32, f32), commands: &[DrawCommand]) {
        let outer = playfield_area(f.area(), grid_size.0, grid_size.1);
        let border = Block::default()
            .borders(Borders::ALL)
            .title(" Dodge the Blocks ");
        let inner = border.inner(outer);
        f.render_widget(border, outer);

        let background = Style::default().bg(BACKGROUND);
        f.buffer_mut().set_style(inner, background);

        let grid = CellGrid {
            area: inner,
            cell_width: cell.0,
            cell_height: cell.1,
        };
        let buf = f.buffer_mut();

        for command in commands {
            match command {
                DrawCommand::Rect { bounds, color } => grid.fill(buf, *bounds, *color),
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    size,
                    color,
                } => {
                    let mut style = background.fg(*color);
                    if *size == FontSize::Large {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    grid.text(buf, text, *x, *y, style);
                }
            }
        }
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    fn draw_rect(&mut self, bounds: Bounds, color: Color) {
        self.commands.push(DrawCommand::Rect { bounds, color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: FontSize, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    fn present(&mut self) -> anyhow::Result<()> {
        let commands = std::mem::take(&mut self.commands);
        let grid_size = self.playfield_cells();
        let cell = (self.cell_width, self.cell_height);

        self.terminal
            .draw(|f| Self::draw_frame(f, grid_size, cell, &commands))?;
        Ok(())
    }
}
