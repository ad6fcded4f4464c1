// Host-side tests for the front-end constants and the shared tuning values.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use heart_core::constants::*;

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        FATAL_ID,
        OVERLAY_ID,
        OVERLAY_FORGIVE_ID,
        OVERLAY_CLOSE_ID,
        PLAY_PAUSE_ID,
        SPEED_SLIDER_ID,
        SPEED_VALUE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '), "{a} is not a valid id");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(LABEL_PAUSE, LABEL_PLAY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn speed_range_matches_slider() {
    assert!(SPEED_MIN > 0.0);
    assert!(SPEED_MIN <= SPEED_DEFAULT && SPEED_DEFAULT <= SPEED_MAX);
    // Slider steps land exactly on both ends
    let steps = (SPEED_MAX - SPEED_MIN) / SPEED_STEP;
    assert!((steps - steps.round()).abs() < 1e-4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn zoom_clamp_contains_start_distance() {
    assert!(CAMERA_NEAR < CAMERA_Z_MIN);
    assert!(CAMERA_Z_MIN <= CAMERA_Z_DEFAULT && CAMERA_Z_DEFAULT <= CAMERA_Z_MAX);
    assert!(CAMERA_Z_MAX < CAMERA_FAR);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}
