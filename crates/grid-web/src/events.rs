use crate::dom;
use crate::input;
use grid_core::AnimationDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_move(canvas: web::HtmlCanvasElement, driver: Rc<RefCell<AnimationDriver>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas);
        driver.borrow_mut().set_pointer(pos);
    }) as Box<dyn FnMut(_)>);
    if let Err(e) =
        window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
    {
        log::error!("pointermove listener: {:?}", e);
    }
    closure.forget();
}

/// Keep the canvas sized to the window and the lattice covering it.
pub fn wire_window_resize(canvas: web::HtmlCanvasElement, driver: Rc<RefCell<AnimationDriver>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        let viewport = dom::sync_canvas_to_window(&canvas);
        driver.borrow_mut().resize(viewport);
    }) as Box<dyn FnMut()>);
    if let Err(e) =
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        log::error!("resize listener: {:?}", e);
    }
    closure.forget();
}
