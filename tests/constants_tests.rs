// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use glyphfield_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tier_thresholds_are_ordered() {
    assert!(MOBILE_MAX_WIDTH < LARGE_TIER_MIN_WIDTH);
    assert!(PARTICLES_SMALL < PARTICLES_LARGE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn depth_and_force_constants_are_consistent() {
    assert!(DEPTH_NEAR > 0.0 && DEPTH_FAR > DEPTH_NEAR);
    // parallax never exceeds 1, so a tick moves at most strength * 1
    assert!(PARALLAX_REFERENCE <= DEPTH_NEAR);
    assert!(REPULSION_STRENGTH > ATTRACTION_STRENGTH);
    assert!(MIN_FORCE_DISTANCE > 0.0 && MIN_FORCE_DISTANCE < INTERACTION_RADIUS);
    // a full tick of drift plus push cannot jump across the wrap margin
    assert!(DRIFT_XY + REPULSION_STRENGTH < WRAP_MARGIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_stays_below_one() {
    assert!(OPACITY_MIN > 0.0);
    assert!(OPACITY_MIN + OPACITY_SPAN <= 1.0);
    assert!(GLYPH_MIN_SIZE < GLYPH_BASE_SIZE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_timings_line_up() {
    // tagline waits for the heading to settle
    assert!(TAGLINE_START_DELAY_MS as u64 >= SCRAMBLE_DURATION_MS);
    assert!(SCRAMBLE_INTERVAL_MS > 0);
    assert!((SCRAMBLE_INTERVAL_MS as u64) < SCRAMBLE_DURATION_MS);
    assert!(!HEADING_TEXT.is_empty());
    assert!(GLYPH_FONT_FAMILY.contains("monospace"));
}
