use glam::Vec2;
use grid_core::{DrawSurface, Hsl};
use web_sys as web;

/// Canvas 2D context adapted to the core's drawing surface.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) {
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start_angle as f64,
            end_angle as f64,
        ) {
            log::warn!("arc at {center} r={radius} rejected: {:?}", e);
        }
    }

    fn set_fill_style(&mut self, color: Hsl) {
        self.ctx.set_fill_style_str(&color.to_string());
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }
}
