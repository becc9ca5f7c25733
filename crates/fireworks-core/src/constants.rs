//! Simulation tuning constants.
//!
//! Physics runs one step per displayed frame, so every rate below is
//! expressed "per frame" rather than per second.

use crate::color::Rgb;
use std::ops::RangeInclusive;

// Particle lifetime
pub const INITIAL_ALPHA: f64 = 3.0; // above 1.0 so a fresh particle stays opaque for a while
pub const DECAY_MIN: f64 = 0.015;
pub const DECAY_SPAN: f64 = 0.015;

// Motion
pub const GRAVITY: f64 = 0.05; // added to vy every frame (canvas y grows downward)
pub const SPEED_BASE: f64 = 1.0;
pub const SPEED_MULTIPLIER_RANGE: RangeInclusive<u32> = 2..=5;
pub const DRAG_MIN: f64 = 0.015; // floor applied to the sampled drag
pub const DRAG_SPAN: f64 = 0.015;

// Sizing
pub const RADIUS_MIN: f64 = 1.0;
pub const RADIUS_SPAN: f64 = 1.5;

// Burst composition
pub const PRIMARY_COUNT_RANGE: RangeInclusive<usize> = 100..=250;
pub const ACCENT_COUNT_RANGE: RangeInclusive<usize> = 30..=50;

// Frame clear
pub const BACKGROUND: Rgb = Rgb::from_hex(0x000000);
