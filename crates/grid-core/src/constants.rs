// Shared simulation/visual tuning constants used by both web and native frontends.

// Lattice
pub const GRID_SPACING: f32 = 30.0; // distance between neighbouring points, in surface pixels
pub const MAX_LATTICE_LINES: usize = 2048; // per axis, caps the point count on oversized viewports

// Pointer interaction
pub const INFLUENCE_RADIUS: f32 = 150.0; // pointer reach, in surface pixels
pub const PUSH_GAIN: f32 = 0.05; // proximity pull toward MAX_DEPTH_OFFSET

// Depth spring
pub const MAX_DEPTH_OFFSET: f32 = 100.0; // fully pulled toward the viewer
pub const REST_DEPTH_OFFSET: f32 = -100.0; // spring equilibrium, behind the surface
pub const SPRING_GAIN: f32 = 0.02;
pub const DAMPING: f32 = 0.1; // per-frame velocity retention
pub const HOME_EPSILON: f32 = 1.0; // |offset - rest| below this counts as home
pub const BOUNCE_WINDOW: f32 = 5.0; // near-rest band where the bounce kick applies
pub const BOUNCE_MIN_SPEED: f32 = 0.5;
pub const BOUNCE_FACTOR: f32 = -0.8;

// Appearance
pub const SATURATION: f32 = 80.0; // percent
pub const BASE_LIGHTNESS: f32 = 50.0; // percent, at rest
pub const LIGHTNESS_SPAN: f32 = 30.0; // added at full displacement
pub const INITIAL_SIZE: f32 = 3.0; // radius before the first integration step
pub const SIZE_FLOOR: f32 = 0.05; // minimum size factor
pub const SIZE_SCALE: f32 = 200.0; // size factor -> radius in pixels
