#![cfg(target_arch = "wasm32")]
use grid_core::{AnimationDriver, GridParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("grid-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document)?;
    let ctx = dom::context_2d(&canvas)?;

    let viewport = dom::sync_canvas_to_window(&canvas);
    let driver = AnimationDriver::new(GridParams::default(), viewport, rand::random())?;
    let driver = Rc::new(RefCell::new(driver));

    events::wire_pointer_move(canvas.clone(), driver.clone());
    events::wire_window_resize(canvas.clone(), driver.clone());

    frame::start_loop(driver, canvas::CanvasSurface::new(canvas, ctx));
    Ok(())
}
