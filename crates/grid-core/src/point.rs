//! Per-cell simulation state and the shared pointer state.
//!
//! A [`GridPoint`] never moves laterally: `position` always equals its home,
//! and the illusion of depth comes purely from `size` and `lightness`.

use crate::appearance::Hsl;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct GridPoint {
    pub position: Vec2,
    home: Vec2,
    pub depth_offset: f32,
    pub depth_velocity: f32,
    max_depth_offset: f32,
    rest_depth_offset: f32,
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub size: f32,
}

impl GridPoint {
    pub fn new(home: Vec2, hue: f32, params: &crate::GridParams) -> Self {
        Self {
            position: home,
            home,
            depth_offset: params.rest_depth_offset,
            depth_velocity: 0.0,
            max_depth_offset: params.max_depth_offset,
            rest_depth_offset: params.rest_depth_offset,
            hue,
            saturation: params.saturation,
            lightness: params.base_lightness,
            size: params.initial_size,
        }
    }

    /// Rest position, fixed at creation.
    #[inline]
    pub fn home(&self) -> Vec2 {
        self.home
    }

    /// Forward bound of the depth axis, fixed at creation.
    #[inline]
    pub fn max_depth_offset(&self) -> f32 {
        self.max_depth_offset
    }

    /// Spring equilibrium, fixed at creation.
    #[inline]
    pub fn rest_depth_offset(&self) -> f32 {
        self.rest_depth_offset
    }

    /// Signed distance from the spring equilibrium.
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.depth_offset - self.rest_depth_offset
    }

    #[inline]
    pub fn color(&self) -> Hsl {
        Hsl::new(self.hue, self.saturation, self.lightness)
    }
}

/// Last known pointer position.
///
/// `position` stays `None` until the first move event; afterwards it keeps
/// the most recent value (last write wins). Its reach is
/// [`GridParams::influence_radius`](crate::GridParams::influence_radius).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

impl PointerState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// Distance to `p` if the pointer is known and closer than `radius`.
    #[inline]
    pub fn distance_within(&self, p: Vec2, radius: f32) -> Option<f32> {
        let d = self.position?.distance(p);
        (d < radius).then_some(d)
    }
}
