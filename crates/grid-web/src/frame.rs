use crate::canvas::CanvasSurface;
use grid_core::{AnimationDriver, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Schedules the stored tick closure with `requestAnimationFrame`.
pub struct RafScheduler {
    tick: TickSlot,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame: {:?}", e);
            }
        }
    }
}

/// Run the driver once per display refresh for the lifetime of the page.
pub fn start_loop(driver: Rc<RefCell<AnimationDriver>>, mut surface: CanvasSurface) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let mut scheduler = RafScheduler { tick: tick.clone() };
    let driver_tick = driver.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        driver_tick
            .borrow_mut()
            .frame(&mut surface, &mut scheduler);
    }) as Box<dyn FnMut()>));

    driver.borrow().start(&mut RafScheduler { tick });
}
