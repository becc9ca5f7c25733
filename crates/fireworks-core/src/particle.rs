use crate::color::Rgb;
use crate::constants::*;
use crate::paint::{Painter, RenderOptions};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// One spark of a burst: a coloured point that drifts, slows, falls and fades.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    position: DVec2,
    velocity: DVec2,
    color: Rgb,
    alpha: f64,
    decay: f64,
    radius: f64,
    air_resistance: f64,
}

impl Particle {
    /// Sample a new particle at `origin`. All randomness comes from `rng`, so a
    /// seeded source reproduces the particle exactly.
    pub fn spawn<R: Rng + ?Sized>(origin: DVec2, color: Rgb, rng: &mut R) -> Self {
        let angle = rng.gen::<f64>() * TAU;
        // Coarse, non-uniform speed distribution: a uniform scaled by a random integer.
        let speed = rng.gen::<f64>() * rng.gen_range(SPEED_MULTIPLIER_RANGE) as f64 + SPEED_BASE;
        let decay = rng.gen::<f64>() * DECAY_SPAN + DECAY_MIN;
        let radius = rng.gen::<f64>() * RADIUS_SPAN + RADIUS_MIN;
        let drag = (rng.gen::<f64>() * DRAG_SPAN + DRAG_MIN).max(DRAG_MIN);
        Self {
            position: origin,
            velocity: DVec2::new(angle.cos(), angle.sin()) * speed,
            color,
            alpha: INITIAL_ALPHA,
            decay,
            radius,
            air_resistance: 1.0 - drag,
        }
    }

    /// Advance one frame: drag, gravity, move, fade.
    pub fn update(&mut self) {
        self.velocity *= self.air_resistance;
        self.velocity.y += GRAVITY;
        self.position += self.velocity;
        self.alpha -= self.decay;
    }

    pub fn draw(&self, painter: &mut dyn Painter, options: &RenderOptions) {
        painter.fill_circle(
            self.position,
            self.radius,
            self.color,
            self.alpha.clamp(0.0, 1.0),
            options.glow_blur,
        );
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }
    pub fn color(&self) -> Rgb {
        self.color
    }
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
    pub fn decay(&self) -> f64 {
        self.decay
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn air_resistance(&self) -> f64 {
        self.air_resistance
    }
}
