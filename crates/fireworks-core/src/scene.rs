//! The active set of fireworks and the per-frame state machine over it.
//!
//! A `Scene` owns everything a running effect mutates: the fireworks in
//! insertion order, the random source used to build new ones, the current
//! surface size and the render options. The front-end keeps one scene behind
//! an `Rc<RefCell<_>>`; tests construct as many as they like.

use crate::constants::BACKGROUND;
use crate::firework::Firework;
use crate::paint::{Painter, RenderOptions};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Pixel size of the drawing surface backing store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

pub struct Scene<R: Rng = StdRng> {
    fireworks: Vec<Firework>,
    rng: R,
    size: SurfaceSize,
    options: RenderOptions,
}

impl<R: Rng> Scene<R> {
    pub fn new(rng: R) -> Self {
        Self {
            fireworks: Vec::new(),
            rng,
            size: SurfaceSize::default(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Launch a firework at canvas pixel `at`; returns its index in the active list.
    pub fn spawn(&mut self, at: DVec2) -> usize {
        let fw = Firework::new(at, &mut self.rng);
        log::debug!(
            "[spawn] ({:.1},{:.1}) color={} accent={} particles={}",
            at.x,
            at.y,
            fw.color(),
            fw.accent(),
            fw.particle_count()
        );
        self.fireworks.push(fw);
        self.fireworks.len() - 1
    }

    /// One animation frame: clear, update+draw each firework in insertion
    /// order, then drop the dead ones.
    pub fn frame(&mut self, painter: &mut dyn Painter) {
        painter.fill_background(
            self.size.width as f64,
            self.size.height as f64,
            BACKGROUND,
            self.options.clear_alpha(),
        );
        for fw in &mut self.fireworks {
            fw.update();
            fw.draw(painter, &self.options);
        }
        self.prune();
    }

    /// Remove fireworks with no particles left, walking back to front.
    fn prune(&mut self) {
        for i in (0..self.fireworks.len()).rev() {
            if !self.fireworks[i].is_alive() {
                self.fireworks.remove(i);
            }
        }
    }

    /// Record a new backing-store size. In-flight particles keep their
    /// positions; they are not rescaled.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = SurfaceSize { width, height };
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
    pub fn size(&self) -> SurfaceSize {
        self.size
    }
    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }
    pub fn len(&self) -> usize {
        self.fireworks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.fireworks.is_empty()
    }
    pub fn particle_count(&self) -> usize {
        self.fireworks.iter().map(Firework::particle_count).sum()
    }
}
