//! HTML canvas backend (WASM only)

use web_sys::CanvasRenderingContext2d;

use super::{Color, DrawSurface};

/// `DrawSurface` over a 2D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    font: String,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, font: &str) -> Self {
        Self {
            ctx,
            font: font.to_string(),
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU)
        {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&self.font);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("Canvas fill_text failed: {:?}", e);
        }
    }
}
