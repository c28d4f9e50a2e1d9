// Host-side tests for the grid lifecycle, the depth spring and the frame loop.

use glam::Vec2;
use grid_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

fn home_set(points: &[GridPoint]) -> BTreeSet<(u32, u32)> {
    points
        .iter()
        .map(|p| (p.home().x.to_bits(), p.home().y.to_bits()))
        .collect()
}

fn held_pointer(at: Vec2) -> PointerState {
    PointerState::at(at)
}

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(f32, f32, f32, f32),
    Begin,
    Arc(Vec2, f32),
    Fill(Hsl),
    FillPath,
    Close,
}

#[derive(Default)]
struct RecordingSurface {
    width: f32,
    height: f32,
    ops: Vec<Op>,
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }
    fn height(&self) -> f32 {
        self.height
    }
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(Op::Clear(x, y, width, height));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::Begin);
    }
    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) {
        assert_eq!(start_angle, 0.0);
        assert!((end_angle - std::f32::consts::TAU).abs() < 1e-6);
        self.ops.push(Op::Arc(center, radius));
    }
    fn set_fill_style(&mut self, color: Hsl) {
        self.ops.push(Op::Fill(color));
    }
    fn fill(&mut self) {
        self.ops.push(Op::FillPath);
    }
    fn close_path(&mut self) {
        self.ops.push(Op::Close);
    }
}

#[derive(Default)]
struct CountingScheduler {
    requests: usize,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}

#[test]
fn lattice_tiles_viewport_at_spacing() {
    let params = GridParams::default();
    let mut rng = StdRng::seed_from_u64(3);
    let (w, h) = (600.0, 420.0);
    let points = build_grid(Viewport::new(w, h), &params, &mut rng);
    assert_eq!(points.len(), 21 * 15);
    for p in &points {
        let home = p.home();
        assert!((0.0..=w).contains(&home.x) && (0.0..=h).contains(&home.y));
        assert_eq!(home.x % params.spacing, 0.0);
        assert_eq!(home.y % params.spacing, 0.0);
    }
    assert_eq!(home_set(&points).len(), points.len());
}

#[test]
fn lattice_covers_uneven_edges() {
    let params = GridParams::default();
    let points = build_grid(
        Viewport::new(95.0, 31.0),
        &params,
        &mut StdRng::seed_from_u64(0),
    );
    let max_x = points.iter().map(|p| p.home().x).fold(0.0, f32::max);
    let max_y = points.iter().map(|p| p.home().y).fold(0.0, f32::max);
    assert_eq!(max_x, 120.0);
    assert_eq!(max_y, 60.0);
}

#[test]
fn rebuild_is_idempotent_on_geometry() {
    let mut driver =
        AnimationDriver::new(GridParams::default(), Viewport::new(250.0, 130.0), 11).unwrap();
    let before = driver.points().to_vec();
    driver.rebuild();
    let after = driver.points();
    assert_eq!(before.len(), after.len());
    assert_eq!(home_set(&before), home_set(after));
    // fresh hues come from the advancing rng
    assert_ne!(
        before.iter().map(|p| p.hue).collect::<Vec<_>>(),
        after.iter().map(|p| p.hue).collect::<Vec<_>>()
    );
}

#[test]
fn same_seed_same_grid() {
    let a = AnimationDriver::new(GridParams::default(), Viewport::new(300.0, 300.0), 5).unwrap();
    let b = AnimationDriver::new(GridParams::default(), Viewport::new(300.0, 300.0), 5).unwrap();
    assert_eq!(a.points(), b.points());
}

#[test]
fn zero_viewport_gives_single_point() {
    let driver = AnimationDriver::new(GridParams::default(), Viewport::new(0.0, 0.0), 1).unwrap();
    assert_eq!(driver.points().len(), 1);
    assert_eq!(driver.points()[0].home(), Vec2::ZERO);
}

#[test]
fn idle_grid_stays_at_rest() {
    let mut driver =
        AnimationDriver::new(GridParams::default(), Viewport::new(300.0, 300.0), 42).unwrap();
    assert_eq!(driver.points().len(), 121);
    for _ in 0..100 {
        driver.step();
    }
    for p in driver.points() {
        assert!((p.depth_offset - REST_DEPTH_OFFSET).abs() < 0.01);
        assert_eq!(p.lightness, 50.0);
    }
}

#[test]
fn released_point_settles_home() {
    let params = GridParams::default();
    let mut p = GridPoint::new(Vec2::new(100.0, 100.0), 200.0, &params);
    let held = held_pointer(Vec2::new(100.0, 100.0));
    for _ in 0..400 {
        integrate_point(&mut p, &held, &params);
    }
    assert!(p.depth_offset > 99.0);

    let gone = PointerState::default();
    for _ in 0..2000 {
        integrate_point(&mut p, &gone, &params);
        assert!(p.size >= params.min_size());
        assert!((50.0..=80.0).contains(&p.lightness));
    }
    assert!((p.depth_offset - params.rest_depth_offset).abs() < 0.01);
    assert_eq!(p.lightness, 50.0);
}

#[test]
fn held_pointer_pulls_toward_viewer() {
    let params = GridParams::default();
    let at = Vec2::new(100.0, 100.0);
    let pointer = held_pointer(at);
    let mut p = GridPoint::new(at, 10.0, &params);

    integrate_point(&mut p, &pointer, &params);
    assert!(p.depth_velocity > 0.0);

    let mut prev = p.depth_offset;
    for _ in 0..500 {
        integrate_point(&mut p, &pointer, &params);
        assert!(p.depth_offset >= prev);
        assert!(p.depth_offset <= params.max_depth_offset + 1e-3);
        prev = p.depth_offset;
    }
    assert!((p.depth_offset - params.max_depth_offset).abs() < 0.01);
    assert_eq!(p.lightness, 80.0);
    assert!((p.size - params.size_scale).abs() < 0.01);
}

#[test]
fn size_never_drops_below_floor() {
    let mut driver =
        AnimationDriver::new(GridParams::default(), Viewport::new(300.0, 300.0), 9).unwrap();
    let floor = driver.params().min_size();
    let path = [
        Vec2::new(150.0, 150.0),
        Vec2::new(10.0, 290.0),
        Vec2::new(290.0, 10.0),
    ];
    for (i, at) in path.iter().cycle().take(300).enumerate() {
        if i % 40 < 20 {
            driver.set_pointer(*at);
        } else {
            driver.clear_pointer();
        }
        driver.step();
        for p in driver.points() {
            assert!(p.size >= floor);
            assert!((50.0..=80.0).contains(&p.lightness));
            assert_eq!(p.position, p.home());
        }
    }
}

#[test]
fn pointer_outside_reach_is_ignored() {
    let params = GridParams::default();
    let mut near = GridPoint::new(Vec2::ZERO, 0.0, &params);
    let mut none = near.clone();
    let far = held_pointer(Vec2::new(150.0, 0.0));
    let absent = PointerState::default();
    for _ in 0..20 {
        integrate_point(&mut near, &far, &params);
        integrate_point(&mut none, &absent, &params);
    }
    assert_eq!(near, none);
}

#[test]
fn identical_inputs_are_deterministic() {
    let mut a = AnimationDriver::new(GridParams::default(), Viewport::new(200.0, 200.0), 8).unwrap();
    let mut b = AnimationDriver::new(GridParams::default(), Viewport::new(200.0, 200.0), 8).unwrap();
    for d in [&mut a, &mut b] {
        d.set_pointer(Vec2::new(60.0, 90.0));
        for _ in 0..30 {
            d.step();
        }
        d.clear_pointer();
        for _ in 0..30 {
            d.step();
        }
    }
    assert_eq!(a.points(), b.points());
}

#[test]
fn render_clears_then_draws_each_point() {
    let mut driver =
        AnimationDriver::new(GridParams::default(), Viewport::new(60.0, 30.0), 2).unwrap();
    let mut surface = RecordingSurface {
        width: 60.0,
        height: 30.0,
        ..Default::default()
    };
    driver.step();
    driver.render(&mut surface);

    assert_eq!(surface.ops[0], Op::Clear(0.0, 0.0, 60.0, 30.0));
    let per_point = &surface.ops[1..];
    assert_eq!(per_point.len(), driver.points().len() * 5);
    for (chunk, p) in per_point.chunks(5).zip(driver.points()) {
        assert_eq!(
            chunk,
            &[
                Op::Begin,
                Op::Arc(p.position, p.size),
                Op::Fill(Hsl::new(p.hue, 80.0, 50.0)),
                Op::FillPath,
                Op::Close,
            ]
        );
    }
}

#[test]
fn frame_requests_exactly_one_more() {
    let mut driver =
        AnimationDriver::new(GridParams::default(), Viewport::new(90.0, 90.0), 4).unwrap();
    let mut surface = RecordingSurface {
        width: 90.0,
        height: 90.0,
        ..Default::default()
    };
    let mut scheduler = CountingScheduler::default();
    driver.start(&mut scheduler);
    assert_eq!(scheduler.requests, 1);
    for n in 1..=5 {
        surface.ops.clear();
        driver.frame(&mut surface, &mut scheduler);
        assert_eq!(scheduler.requests, 1 + n);
        assert!(matches!(surface.ops[0], Op::Clear(..)));
    }
    assert_eq!(driver.stats().total_frames(), 5);
}

#[test]
fn resize_rebuilds_before_next_frame() {
    let mut driver =
        AnimationDriver::new(GridParams::default(), Viewport::new(300.0, 300.0), 4).unwrap();
    driver.set_pointer(Vec2::new(150.0, 150.0));
    for _ in 0..10 {
        driver.step();
    }
    driver.resize(Viewport::new(600.0, 300.0));
    assert_eq!(driver.points().len(), 21 * 11);
    assert!(driver
        .points()
        .iter()
        .all(|p| p.depth_offset == REST_DEPTH_OFFSET && p.depth_velocity == 0.0));
    // pointer survives a rebuild
    assert_eq!(driver.pointer().position, Some(Vec2::new(150.0, 150.0)));
}

#[test]
fn driver_reach_follows_configured_radius() {
    let narrow = GridParams::default();
    let wide = GridParams::default().with_influence_radius(300.0);
    let viewport = Viewport::new(210.0, 0.0);
    let mut a = AnimationDriver::new(narrow, viewport, 5).unwrap();
    let mut b = AnimationDriver::new(wide, viewport, 5).unwrap();
    for d in [&mut a, &mut b] {
        d.set_pointer(Vec2::ZERO);
        for _ in 0..200 {
            d.step();
        }
    }
    // the point at (210, 0) is out of reach for 150 but inside 300
    let far_a = a.points().last().unwrap();
    let far_b = b.points().last().unwrap();
    assert_eq!(far_a.home(), Vec2::new(210.0, 0.0));
    assert_eq!(far_a.depth_offset, REST_DEPTH_OFFSET);
    assert_eq!(far_a.lightness, 50.0);
    assert!(far_b.depth_offset > 0.0);
    assert!(far_b.lightness > 50.0);
}

#[test]
fn oversized_resize_is_capped() {
    let mut driver =
        AnimationDriver::new(GridParams::default(), Viewport::new(300.0, 300.0), 4).unwrap();
    driver.resize(Viewport::new(1e30, 30.0));
    assert_eq!(driver.points().len(), MAX_LATTICE_LINES * 2);
    driver.set_pointer(Vec2::new(15.0, 15.0));
    driver.step();
}
