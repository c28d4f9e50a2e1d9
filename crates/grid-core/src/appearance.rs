//! Depth -> visual channel mapping.
//!
//! Lightness and radius are pure functions of a point's depth offset and its
//! forward bound. The integrator calls them every frame after the velocity
//! update, before the renderer reads the point.

use crate::GridParams;
use glam::Vec3;
use std::fmt;

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to RGB components in [0, 1].
    pub fn to_rgb(self) -> Vec3 {
        hsl_to_rgb(self.hue, self.saturation / 100.0, self.lightness / 100.0)
    }
}

/// CSS color syntax, e.g. `hsl(212.5, 80%, 65%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// `h` in degrees (any range), `s` and `l` in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let h = h.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Vec3::new(r + m, g + m, b + m)
}

/// Lightness for a point under pointer influence.
///
/// Grows with `|depth_offset|` and saturates at `base + span` once it reaches
/// `max_depth_offset`. Rounded to a whole percent.
#[inline]
pub fn lightness_for(depth_offset: f32, max_depth_offset: f32, params: &GridParams) -> f32 {
    let ratio = (depth_offset.abs() / max_depth_offset).min(1.0);
    (params.base_lightness + ratio * params.lightness_span).round()
}

/// Radius for a depth offset, floored at [`GridParams::min_size`].
#[inline]
pub fn size_for(depth_offset: f32, max_depth_offset: f32, params: &GridParams) -> f32 {
    let max = max_depth_offset;
    let factor = ((max + depth_offset) / (2.0 * max)).max(params.size_floor);
    factor * params.size_scale
}
