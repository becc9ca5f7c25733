use glam::DVec2;
use web_sys as web;

/// Bounding box of the canvas in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CssRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map client (viewport) coordinates into canvas backing-store pixels,
/// scaling by the ratio between backing size and displayed size.
/// A collapsed rect has no valid mapping.
#[inline]
pub fn client_to_canvas_px(
    client: DVec2,
    rect: CssRect,
    canvas_width: u32,
    canvas_height: u32,
) -> Option<DVec2> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    let x = (client.x - rect.left) * (canvas_width as f64 / rect.width);
    let y = (client.y - rect.top) * (canvas_height as f64 / rect.height);
    Some(DVec2::new(x, y))
}

/// Backing-store size for a displayed (offset) size in CSS pixels.
#[inline]
pub fn backing_size(display_width: i32, display_height: i32) -> (u32, u32) {
    (display_width.max(0) as u32, display_height.max(0) as u32)
}

// ---------------- DOM adapters ----------------
#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> CssRect {
    let r = canvas.get_bounding_client_rect();
    CssRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

#[inline]
pub fn click_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<DVec2> {
    let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
    client_to_canvas_px(client, canvas_rect(canvas), canvas.width(), canvas.height())
}
