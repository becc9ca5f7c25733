use crate::input;
use fireworks_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Spawn a firework wherever the canvas is clicked.
pub fn wire_click_spawn(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
    let canvas_for_click = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        match input::click_canvas_px(&ev, &canvas_for_click) {
            Some(at) => {
                scene.borrow_mut().spawn(at);
            }
            None => log::debug!("[click] canvas has no displayed area; ignored"),
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
