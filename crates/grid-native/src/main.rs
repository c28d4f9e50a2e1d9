use glam::Vec2;
use grid_core::{AnimationDriver, FrameScheduler, GridParams, Viewport};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

mod batch;
mod gpu;

use batch::DiscBatch;
use gpu::GpuState;

const SEED_ENV: &str = "DEPTH_GRID_SEED";

/// Next frame = next `RedrawRequested` for the window.
struct RedrawScheduler<'w>(&'w winit::window::Window);

impl FrameScheduler for RedrawScheduler<'_> {
    fn request_frame(&mut self) {
        self.0.request_redraw();
    }
}

fn seed_from_env() -> u64 {
    match std::env::var(SEED_ENV) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::warn!("ignoring {SEED_ENV}={raw:?}: {e}");
            rand::random()
        }),
        Err(_) => rand::random(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Depth Grid (native)")
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let (w, h) = gpu.size();
    let seed = seed_from_env();
    log::info!("grid seed {seed}");
    let mut driver =
        AnimationDriver::new(GridParams::default(), Viewport::new(w as f32, h as f32), seed)?;
    let mut batch = DiscBatch::new(w as f32, h as f32, gpu.wants_linear_color());

    driver.start(&mut RedrawScheduler(gpu.window));

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        match event {
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                let viewport = Viewport::new(size.width as f32, size.height as f32);
                batch.resize(viewport.width, viewport.height);
                driver.resize(viewport);
            }
            WindowEvent::CursorMoved { position, .. } => {
                driver.set_pointer(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => {
                driver.frame(&mut batch, &mut RedrawScheduler(gpu.window));
                match gpu.render(batch.instances()) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.resize(gpu.window.inner_size())
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("frame skipped: {e:?}"),
                }
            }
            _ => {}
        }
    })?;
    Ok(())
}
