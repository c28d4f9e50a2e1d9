//! Platform-free core of the depth grid animation.
//!
//! A lattice of [`GridPoint`]s reacts to the pointer by springing along a
//! virtual depth axis; depth is shown only through disc size and lightness.
//! The web and native frontends supply a [`DrawSurface`] and a
//! [`FrameScheduler`] and forward input to the [`AnimationDriver`].

pub mod appearance;
pub mod constants;
pub mod driver;
pub mod grid;
pub mod params;
pub mod point;
pub mod render;
pub mod spring;

pub use appearance::{hsl_to_rgb, Hsl};
pub use constants::*;
pub use driver::{AnimationDriver, FrameScheduler, FrameStats};
pub use grid::{build_grid, lattice_dims, Viewport};
pub use params::{GridParams, ParamsError};
pub use point::{GridPoint, PointerState};
pub use render::{render_grid, DrawSurface};
pub use spring::{integrate, integrate_point};
