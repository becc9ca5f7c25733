use fireworks_core::{Painter, Rgb};
use glam::DVec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Painter` over a canvas 2D context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Painter for CanvasPainter {
    fn fill_background(&mut self, width: f64, height: f64, color: Rgb, alpha: f64) {
        self.ctx.set_fill_style_str(&format!(
            "rgba({}, {}, {}, {})",
            color.r, color.g, color.b, alpha
        ));
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(
        &mut self,
        center: DVec2,
        radius: f64,
        color: Rgb,
        alpha: f64,
        glow_blur: Option<f64>,
    ) {
        let css = color.to_string();
        self.ctx.save();
        self.ctx.set_global_alpha(alpha);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.set_fill_style_str(&css);
        self.ctx.fill();
        if let Some(blur) = glow_blur {
            self.ctx.set_shadow_blur(blur);
            self.ctx.set_shadow_color(&css);
            self.ctx.fill();
        }
        self.ctx.restore();
    }
}
