//! Rendering module
//!
//! The simulation never draws. After each step the session hands a read-only
//! view of the state to `render_scene`, which paints it through any
//! `Renderer` backend.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::game::GamePhase;
use crate::sim::{Brick, GameState, Outcome};

/// A 2D drawing surface. Colours are CSS colour strings.
pub trait Renderer {
    fn fill_background(&mut self, color: &str);
    fn draw_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: &str);
}

/// Scene colours
pub mod palette {
    pub const BACKGROUND: &str = "black";
    pub const BALL: &str = "white";
    pub const PADDLE: &str = "#d0d0d0";
    pub const TEXT: &str = "white";
    /// Brick colour by durability, index 0 = one hit left
    pub const BRICKS: [&str; 7] = [
        "#4caf50", "#8bc34a", "#cddc39", "#ffeb3b", "#ffc107", "#ff9800", "#f44336",
    ];
}

/// Offset of the status line from the arena's bottom-left corner
const STATUS_MARGIN: f32 = 8.0;

pub fn brick_color(brick: &Brick) -> &'static str {
    let index = (brick.durability.max(1) as usize - 1).min(palette::BRICKS.len() - 1);
    palette::BRICKS[index]
}

/// Status line for the current phase
pub fn status_text(state: &GameState, phase: GamePhase) -> String {
    match phase {
        GamePhase::Ready => "Press any key to start".to_string(),
        GamePhase::Running => format!("Bricks: {}", state.bricks.len()),
        GamePhase::Ended => match state.outcome {
            Some(Outcome::Won) => "You win!".to_string(),
            Some(Outcome::Lost) | None => "Game over".to_string(),
        },
    }
}

/// Paint one frame
pub fn render_scene<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameState,
    phase: GamePhase,
    show_status: bool,
) {
    renderer.fill_background(palette::BACKGROUND);

    for brick in &state.bricks {
        renderer.draw_rectangle(
            brick.pos.x,
            brick.pos.y,
            brick.width,
            brick.height,
            brick_color(brick),
        );
    }

    let paddle = &state.paddle;
    renderer.draw_rectangle(
        paddle.pos.x,
        paddle.pos.y,
        paddle.width,
        paddle.height,
        palette::PADDLE,
    );

    let ball = &state.ball;
    renderer.draw_circle(ball.pos.x, ball.pos.y, ball.radius, palette::BALL);

    if show_status {
        let y = state.arena.height - STATUS_MARGIN;
        renderer.draw_text(STATUS_MARGIN, y, &status_text(state, phase), palette::TEXT);
    }
}
