use crate::appearance::Hsl;
use crate::GridPoint;
use glam::Vec2;
use std::f32::consts::TAU;

/// Immediate-mode 2D drawing target, shaped after the canvas 2D API.
pub trait DrawSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn begin_path(&mut self);
    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32);
    fn set_fill_style(&mut self, color: Hsl);
    fn fill(&mut self);
    fn close_path(&mut self);
}

/// Clear `surface` and draw every point as a filled disc.
pub fn render_grid<S: DrawSurface + ?Sized>(points: &[GridPoint], surface: &mut S) {
    let (w, h) = (surface.width(), surface.height());
    surface.clear_rect(0.0, 0.0, w, h);
    for point in points {
        surface.begin_path();
        surface.arc(point.position, point.size, 0.0, TAU);
        surface.set_fill_style(point.color());
        surface.fill();
        surface.close_path();
    }
}
