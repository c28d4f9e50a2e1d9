//! Frame loop state shared by the web and native frontends.
//!
//! The driver owns the pointer, the viewport and the point collection. Hosts
//! feed it input through setters and call [`AnimationDriver::frame`] from
//! their refresh callback; the driver asks for the next callback through a
//! [`FrameScheduler`]. Tests can call [`AnimationDriver::step`] directly.

use crate::grid::{build_grid, Viewport};
use crate::render::{render_grid, DrawSurface};
use crate::spring::integrate;
use crate::{GridParams, GridPoint, ParamsError, PointerState};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Host hook for "call me again on the next display refresh".
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

const STATS_WINDOW: Duration = Duration::from_secs(1);

/// Rolling frames-per-second counter.
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    window_start: Option<Instant>,
    frames_in_window: u32,
    total_frames: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame at `now`. Returns the rate once per elapsed window.
    pub fn record(&mut self, now: Instant) -> Option<f32> {
        self.total_frames += 1;
        let start = *self.window_start.get_or_insert(now);
        self.frames_in_window += 1;
        let elapsed = now.duration_since(start);
        if elapsed < STATS_WINDOW {
            return None;
        }
        let fps = self.frames_in_window as f32 / elapsed.as_secs_f32();
        self.window_start = Some(now);
        self.frames_in_window = 0;
        Some(fps)
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

pub struct AnimationDriver {
    params: GridParams,
    pointer: PointerState,
    viewport: Viewport,
    points: Vec<GridPoint>,
    rng: StdRng,
    stats: FrameStats,
}

impl AnimationDriver {
    pub fn new(params: GridParams, viewport: Viewport, seed: u64) -> Result<Self, ParamsError> {
        if let Err(e) = params.validate() {
            log::warn!("rejecting grid params: {e}");
            return Err(e);
        }
        let mut driver = Self {
            pointer: PointerState::default(),
            params,
            viewport: viewport.sanitized(),
            points: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            stats: FrameStats::new(),
        };
        driver.rebuild();
        Ok(driver)
    }

    pub fn params(&self) -> &GridParams {
        &self.params
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer.position = Some(position);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.position = None;
    }

    /// Adopt a new viewport and rebuild the lattice to cover it.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport.sanitized();
        self.rebuild();
    }

    /// Discard every point and lay out a fresh lattice with new hues.
    pub fn rebuild(&mut self) {
        self.points = build_grid(self.viewport, &self.params, &mut self.rng);
        log::info!(
            "grid rebuilt: {} points for {}x{}",
            self.points.len(),
            self.viewport.width,
            self.viewport.height
        );
    }

    /// Integrate every point by one frame.
    pub fn step(&mut self) {
        integrate(&mut self.points, &self.pointer, &self.params);
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        render_grid(&self.points, surface);
    }

    /// Ask for the first frame.
    pub fn start<F: FrameScheduler + ?Sized>(&self, scheduler: &mut F) {
        log::info!("animation starting with {} points", self.points.len());
        scheduler.request_frame();
    }

    /// One refresh: integrate, draw, then request exactly one more frame.
    pub fn frame<S, F>(&mut self, surface: &mut S, scheduler: &mut F)
    where
        S: DrawSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        self.step();
        self.render(surface);
        if let Some(fps) = self.stats.record(Instant::now()) {
            log::debug!("{fps:.1} fps over {} points", self.points.len());
        }
        scheduler.request_frame();
    }
}
