// Host-side tests for constants and their relationships.
// Front-end constants come from the wasm-only crate, so include them directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use fireworks_core::constants::*;
use fireworks_core::{ACCENT_PALETTE, PRIMARY_PALETTE};
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn physics_constants_are_sane() {
    assert!(INITIAL_ALPHA > 1.0, "fresh particles should start fully opaque");
    assert!(DECAY_MIN > 0.0 && DECAY_SPAN > 0.0);
    assert!(GRAVITY > 0.0);
    assert!(SPEED_BASE > 0.0);
    assert!(RADIUS_MIN > 0.0 && RADIUS_SPAN > 0.0);
    assert!(DRAG_MIN > 0.0 && DRAG_MIN + DRAG_SPAN < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lifetime_window_is_what_the_effect_relies_on() {
    let shortest = INITIAL_ALPHA / (DECAY_MIN + DECAY_SPAN);
    let longest = INITIAL_ALPHA / DECAY_MIN;
    assert!((shortest - 100.0).abs() < 1e-9);
    assert!((longest - 200.0).abs() < 1e-9);
}

#[test]
fn background_is_black() {
    assert_eq!((BACKGROUND.r, BACKGROUND.g, BACKGROUND.b), (0, 0, 0));
    assert_eq!(BACKGROUND.to_string(), "#000000");
}

#[test]
fn burst_ranges_match_documented_totals() {
    assert_eq!(*PRIMARY_COUNT_RANGE.start() + *ACCENT_COUNT_RANGE.start(), 130);
    assert_eq!(*PRIMARY_COUNT_RANGE.end() + *ACCENT_COUNT_RANGE.end(), 300);
    assert_eq!(SPEED_MULTIPLIER_RANGE, 2..=5);
}

#[test]
fn palettes_have_expected_sizes_and_no_duplicates() {
    assert_eq!(PRIMARY_PALETTE.len(), 12);
    assert_eq!(ACCENT_PALETTE.len(), 5);
    let unique: std::collections::HashSet<_> = PRIMARY_PALETTE.iter().collect();
    assert_eq!(unique.len(), PRIMARY_PALETTE.len());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn front_end_constants_are_usable() {
    assert!(!CANVAS_ID.is_empty());
    assert!(STATS_LOG_INTERVAL_SEC > 0.0);
    assert_eq!(DEFAULT_LOG_LEVEL, log::Level::Info);
}
