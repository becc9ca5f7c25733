#![cfg(target_arch = "wasm32")]
use fireworks_core::Scene;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::DEFAULT_LOG_LEVEL).ok();
    log::info!("fireworks-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, constants::CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;

    let options = dom::read_render_options(&canvas);
    let scene = Rc::new(RefCell::new(
        Scene::new(StdRng::from_entropy()).with_options(options),
    ));

    events::wire_canvas_resize(&canvas, scene.clone());
    events::wire_click_spawn(&canvas, scene.clone());

    {
        let s = scene.borrow();
        log::info!(
            "[init] canvas={}x{} trail_fade={:?} glow_blur={:?}",
            s.size().width,
            s.size().height,
            s.options().trail_fade,
            s.options().glow_blur
        );
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene,
        render::CanvasPainter::new(ctx),
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
