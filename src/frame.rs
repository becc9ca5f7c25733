use crate::constants::STATS_LOG_INTERVAL_SEC;
use crate::render::CanvasPainter;
use fireworks_core::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub painter: CanvasPainter,

    pub stats_since: Instant,
    pub frames_since: u32,
}

impl FrameContext {
    pub fn new(scene: Rc<RefCell<Scene>>, painter: CanvasPainter) -> Self {
        Self {
            scene,
            painter,
            stats_since: Instant::now(),
            frames_since: 0,
        }
    }

    pub fn frame(&mut self) {
        self.scene.borrow_mut().frame(&mut self.painter);
        self.frames_since += 1;
        self.maybe_log_stats();
    }

    fn maybe_log_stats(&mut self) {
        let elapsed = self.stats_since.elapsed().as_secs_f32();
        if elapsed < STATS_LOG_INTERVAL_SEC {
            return;
        }
        let scene = self.scene.borrow();
        log::debug!(
            "[stats] fireworks={} particles={} fps={:.1}",
            scene.len(),
            scene.particle_count(),
            self.frames_since as f32 / elapsed
        );
        self.stats_since = Instant::now();
        self.frames_since = 0;
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let tick = tick.borrow();
    if let (Some(w), Some(cb)) = (web::window(), tick.as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
