use crate::dom;
use fireworks_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store (and the scene's notion of it) equal to the
/// displayed size. Runs once immediately.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
    let (w, h) = dom::sync_canvas_backing_size(canvas);
    scene.borrow_mut().resize(w, h);

    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        scene.borrow_mut().resize(w, h);
        log::debug!("[resize] {}x{}", w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
