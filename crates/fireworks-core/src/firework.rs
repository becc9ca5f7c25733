use crate::color::{pick_accent, pick_primary, Rgb};
use crate::constants::{ACCENT_COUNT_RANGE, PRIMARY_COUNT_RANGE};
use crate::paint::{Painter, RenderOptions};
use crate::particle::Particle;
use glam::DVec2;
use rand::Rng;

/// A single burst. Lives for as long as any of its particles does.
#[derive(Clone, Debug)]
pub struct Firework {
    origin: DVec2,
    color: Rgb,
    accent: Rgb,
    particles: Vec<Particle>,
}

impl Firework {
    pub fn new<R: Rng + ?Sized>(origin: DVec2, rng: &mut R) -> Self {
        let color = pick_primary(rng);
        let accent = pick_accent(color, rng);
        let primary_count = rng.gen_range(PRIMARY_COUNT_RANGE);
        let accent_count = rng.gen_range(ACCENT_COUNT_RANGE);

        let mut particles = Vec::with_capacity(primary_count + accent_count);
        particles.extend((0..primary_count).map(|_| Particle::spawn(origin, color, rng)));
        particles.extend((0..accent_count).map(|_| Particle::spawn(origin, accent, rng)));

        Self {
            origin,
            color,
            accent,
            particles,
        }
    }

    /// Step every particle, then drop the ones that faded out.
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn draw(&self, painter: &mut dyn Painter, options: &RenderOptions) {
        for p in &self.particles {
            p.draw(painter, options);
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }
    pub fn color(&self) -> Rgb {
        self.color
    }
    pub fn accent(&self) -> Rgb {
        self.accent
    }
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}
