use glam::Vec2;
use lumen_core::constants::CONNECTION_LINE_WIDTH;
use lumen_core::Painter;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Painter` over a 2D canvas context. Discs and links share one color; each
/// call only varies the global alpha.
pub struct Canvas2dPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2dPainter {
    /// `None` when the canvas cannot provide a 2D context.
    pub fn for_canvas(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    /// Resizing the canvas resets context state, so call this after every
    /// resize as well as on color changes.
    pub fn apply_style(&self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(CONNECTION_LINE_WIDTH);
    }
}

impl Painter for Canvas2dPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn disc(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
