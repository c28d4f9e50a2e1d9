use crate::{GridParams, GridPoint, MAX_LATTICE_LINES};
use glam::Vec2;
use rand::Rng;

/// Surface extent in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Negative or non-finite extents collapse to zero.
    #[inline]
    pub fn sanitized(self) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: clean(self.width),
            height: clean(self.height),
        }
    }
}

/// Number of lattice columns and rows covering `viewport` at `spacing`.
///
/// Both ends are inclusive, so a zero-sized axis still yields one line and
/// the far edge is always covered even when it is not a multiple of `spacing`.
/// Each axis is capped at [`MAX_LATTICE_LINES`].
pub fn lattice_dims(viewport: Viewport, spacing: f32) -> (usize, usize) {
    if !(spacing.is_finite() && spacing > 0.0) {
        return (0, 0);
    }
    let v = viewport.sanitized();
    // `as` saturates on overflow, so an infinite quotient lands on usize::MAX
    let lines = |extent: f32| {
        ((extent / spacing).ceil() as usize)
            .saturating_add(1)
            .min(MAX_LATTICE_LINES)
    };
    (lines(v.width), lines(v.height))
}

/// Build a fresh row-major lattice of points tiling `viewport`.
pub fn build_grid<R: Rng>(
    viewport: Viewport,
    params: &GridParams,
    rng: &mut R,
) -> Vec<GridPoint> {
    let (cols, rows) = lattice_dims(viewport, params.spacing);
    let mut points = Vec::with_capacity(cols.saturating_mul(rows));
    for j in 0..rows {
        for i in 0..cols {
            let home = Vec2::new(i as f32 * params.spacing, j as f32 * params.spacing);
            let hue = rng.gen_range(0.0..360.0);
            points.push(GridPoint::new(home, hue, params));
        }
    }
    points
}
