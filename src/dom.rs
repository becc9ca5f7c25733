use crate::input;
use fireworks_core::{RenderOptions, GLOW_BLUR_ATTR, TRAIL_FADE_ATTR};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("unexpected context type: {:?}", e))
}

/// Match the canvas backing store to its displayed size; returns the new size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = input::backing_size(canvas.offset_width(), canvas.offset_height());
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

/// Optional visual variants from `data-*` attributes on the canvas. Invalid
/// values are reported and ignored.
pub fn read_render_options(canvas: &web::HtmlCanvasElement) -> RenderOptions {
    let trail = canvas.get_attribute(TRAIL_FADE_ATTR);
    let glow = canvas.get_attribute(GLOW_BLUR_ATTR);
    match RenderOptions::from_attrs(trail.as_deref(), glow.as_deref()) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[options] {}; using defaults", e);
            RenderOptions::default()
        }
    }
}
