use ratatui::style::Color;

use crate::render::{FontSize, Renderer};
use crate::session::GameSession;

pub const PLAYER_COLOR: Color = Color::Rgb(50, 200, 255);
pub const TEXT_COLOR: Color = Color::Rgb(255, 255, 255);
pub const GAME_OVER_COLOR: Color = Color::Rgb(255, 50, 50);

pub const CONTROLS_HINT: &str = "Move: ← →  or A D";
pub const RESTART_HINT: &str = "Press R to restart or Esc to quit";

/// Draws one frame of the session and flushes it.
pub fn render<R: Renderer>(renderer: &mut R, session: &mut GameSession) -> anyhow::Result<()> {
    let screen = renderer.screen_size();
    let width = screen.width_f32();
    let height = screen.height_f32();

    renderer.draw_rect(session.player_bounds(), PLAYER_COLOR);
    for (bounds, color) in session.render_blocks() {
        renderer.draw_rect(bounds, color);
    }

    let score = session.score();
    renderer.draw_text(
        &format!("Score: {score}"),
        10.0,
        10.0,
        FontSize::Normal,
        TEXT_COLOR,
    );
    renderer.draw_text(
        CONTROLS_HINT,
        width - 260.0,
        10.0,
        FontSize::Normal,
        TEXT_COLOR,
    );

    if session.is_game_over() {
        let center_x = (width / 2.0).floor();
        let center_y = (height / 2.0).floor();

        renderer.draw_text(
            "GAME OVER",
            center_x - 160.0,
            center_y - 80.0,
            FontSize::Large,
            GAME_OVER_COLOR,
        );
        renderer.draw_text(
            &format!("Final score: {score}"),
            center_x - 110.0,
            center_y - 10.0,
            FontSize::Normal,
            TEXT_COLOR,
        );
        renderer.draw_text(
            RESTART_HINT,
            center_x - 200.0,
            center_y + 40.0,
            FontSize::Normal,
            TEXT_COLOR,
        );
    }

    renderer.present()
}
