//! Rendering module
//!
//! The game draws through three immediate-mode primitives (`DrawSurface`).
//! Hosts provide the implementation: an HTML canvas on the web, a character
//! grid in the terminal, or a `DrawList` in tests.

pub mod cells;
pub mod draw_list;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use cells::CellGrid;
pub use draw_list::{DrawCommand, DrawList};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::consts::*;
use crate::sim::GameState;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#ffffff`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Host drawing primitives
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}

/// Presentation options that do not affect gameplay
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// CSS font used for the scores
    pub score_font: String,
    pub background: Color,
    pub foreground: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            score_font: SCORE_FONT.to_string(),
            background: Color::BLACK,
            foreground: Color::WHITE,
        }
    }
}

/// Redraw the whole frame from the current state
pub fn render<S: DrawSurface + ?Sized>(state: &GameState, surface: &mut S, style: &RenderStyle) {
    let w = state.surface.width;
    let h = state.surface.height;
    let fg = style.foreground;

    // Clear
    surface.fill_rect(0.0, 0.0, w, h, style.background);

    draw_net(surface, w, h, fg);

    // Scores
    surface.draw_text(&state.user.score.to_string(), w / 4.0, h / 5.0, fg);
    surface.draw_text(&state.com.score.to_string(), 3.0 * w / 4.0, h / 5.0, fg);

    // Paddles
    for paddle in [&state.user, &state.com] {
        surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, fg);
    }

    // Ball
    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, fg);
}

/// Dashed vertical line down the middle
fn draw_net<S: DrawSurface + ?Sized>(surface: &mut S, w: f32, h: f32, color: Color) {
    let x = w / 2.0 - NET_SEGMENT_WIDTH / 2.0;
    let mut y = 0.0;
    while y <= h {
        surface.fill_rect(x, y, NET_SEGMENT_WIDTH, NET_SEGMENT_HEIGHT, color);
        y += NET_SPACING;
    }
}
