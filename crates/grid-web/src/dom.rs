use anyhow::anyhow;
use grid_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "particle-canvas";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{CANVAS_ID} is not a canvas: {:?}", e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected context type: {:?}", e))
}

/// Size the canvas backing store to the window's inner size, in CSS pixels.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Viewport {
    let inner = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    if let Some(w) = web::window() {
        let width = inner(w.inner_width()).max(0.0) as u32;
        let height = inner(w.inner_height()).max(0.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
    }
    Viewport::new(canvas.width() as f32, canvas.height() as f32)
}
