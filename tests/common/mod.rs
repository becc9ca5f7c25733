// Shared test helpers: a painter that records what it was asked to draw.

#![allow(dead_code)]
use fireworks_core::{Painter, Rgb};
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Background {
        width: f64,
        height: f64,
        color: Rgb,
        alpha: f64,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: Rgb,
        alpha: f64,
        glow_blur: Option<f64>,
    },
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Circle { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Painter for Recorder {
    fn fill_background(&mut self, width: f64, height: f64, color: Rgb, alpha: f64) {
        self.ops.push(Op::Background {
            width,
            height,
            color,
            alpha,
        });
    }

    fn fill_circle(
        &mut self,
        center: DVec2,
        radius: f64,
        color: Rgb,
        alpha: f64,
        glow_blur: Option<f64>,
    ) {
        self.ops.push(Op::Circle {
            center,
            radius,
            color,
            alpha,
            glow_blur,
        });
    }
}
