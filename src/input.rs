use glam::Vec2;
use web_sys as web;

/// Pointer position in CSS pixels relative to the canvas' top-left corner.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Wheel delta normalised to pixels. Line and page modes are scaled up.
#[inline]
pub fn wheel_delta_px(ev: &web::WheelEvent) -> f32 {
    let scale = match ev.delta_mode() {
        web::WheelEvent::DOM_DELTA_LINE => 100.0 / 3.0,
        web::WheelEvent::DOM_DELTA_PAGE => 800.0,
        _ => 1.0,
    };
    ev.delta_y() as f32 * scale
}
