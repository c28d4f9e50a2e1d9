use glam::Vec2;
use web_sys as web;

/// Map a client-space point into canvas backing-store pixels.
///
/// `rect_origin`/`rect_size` describe the canvas' bounding client rect and
/// `canvas_size` its backing store. A collapsed rect falls back to the
/// unscaled offset from the rect origin.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Vec2 {
    let css = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        css / rect_size * canvas_size
    } else {
        css
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
