//! Proximity force and damped depth spring.
//!
//! Each frame a point takes one of two branches: inside the pointer's reach
//! it is pulled toward `max_depth_offset`, outside it springs back toward
//! `rest_depth_offset`. Both branches then share the same explicit Euler
//! update, heavy damping, near-rest bounce and size derivation.
//!
//! Reach always comes from [`GridParams::influence_radius`]; depth bounds
//! always come from the point itself.

use crate::appearance::{lightness_for, size_for};
use crate::{GridParams, GridPoint, PointerState};

/// Velocity increment from a pointer at distance `distance`.
///
/// Zero at or beyond `influence_radius`; otherwise scales with closeness and
/// with how far the point still is from full displacement.
#[inline]
pub fn proximity_boost(point: &GridPoint, distance: f32, params: &GridParams) -> f32 {
    let radius = params.influence_radius;
    if distance >= radius {
        return 0.0;
    }
    let force_factor = (radius - distance) / radius;
    force_factor * (point.max_depth_offset() - point.depth_offset) * params.push_gain
}

/// Restoring velocity increment toward the equilibrium.
#[inline]
pub fn spring_pull(point: &GridPoint, params: &GridParams) -> f32 {
    (point.rest_depth_offset() - point.depth_offset) * params.spring_gain
}

/// Advance one point by one frame.
pub fn integrate_point(point: &mut GridPoint, pointer: &PointerState, params: &GridParams) {
    match pointer.distance_within(point.position, params.influence_radius) {
        Some(distance) => {
            point.depth_velocity += proximity_boost(point, distance, params);
            let max = point.max_depth_offset();
            point.lightness = lightness_for(point.depth_offset, max, params);
        }
        None => {
            point.depth_velocity += spring_pull(point, params);
            if point.displacement().abs() < params.home_epsilon {
                point.lightness = params.base_lightness;
            }
        }
    }

    point.depth_offset += point.depth_velocity;
    point.depth_velocity *= params.damping;

    if point.displacement().abs() < params.bounce_window
        && point.depth_velocity.abs() > params.bounce_min_speed
    {
        point.depth_velocity *= params.bounce_factor;
    }

    point.size = size_for(point.depth_offset, point.max_depth_offset(), params);
}

/// Advance every point by one frame.
pub fn integrate(points: &mut [GridPoint], pointer: &PointerState, params: &GridParams) {
    for point in points.iter_mut() {
        integrate_point(point, pointer, params);
    }
}
