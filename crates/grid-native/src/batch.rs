//! Canvas-style drawing calls collected into GPU disc instances.

use glam::Vec2;
use grid_core::{DrawSurface, Hsl};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DiscInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub struct DiscBatch {
    width: f32,
    height: f32,
    linear_output: bool,
    path: Option<(Vec2, f32)>,
    fill: [f32; 4],
    instances: Vec<DiscInstance>,
}

impl DiscBatch {
    /// `linear_output` is set when the target format re-encodes to sRGB.
    pub fn new(width: f32, height: f32, linear_output: bool) -> Self {
        Self {
            width,
            height,
            linear_output,
            path: None,
            fill: [1.0; 4],
            instances: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn instances(&self) -> &[DiscInstance] {
        &self.instances
    }
}

impl DrawSurface for DiscBatch {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    // Partial clears never happen in this app; any clear drops the frame.
    fn clear_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {
        self.instances.clear();
    }

    fn begin_path(&mut self) {
        self.path = None;
    }

    fn arc(&mut self, center: Vec2, radius: f32, _start_angle: f32, _end_angle: f32) {
        self.path = Some((center, radius.max(0.0)));
    }

    fn set_fill_style(&mut self, color: Hsl) {
        let mut rgb = color.to_rgb();
        if self.linear_output {
            rgb = rgb.to_array().map(srgb_to_linear).into();
        }
        self.fill = rgb.extend(1.0).to_array();
    }

    fn fill(&mut self) {
        if let Some((center, radius)) = self.path {
            self.instances.push(DiscInstance {
                center: center.to_array(),
                radius,
                _pad: 0.0,
                color: self.fill,
            });
        }
    }

    fn close_path(&mut self) {}
}
