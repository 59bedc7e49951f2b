// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(BURN_DURATION_MS > 0.0);
    assert!(BURN_MIN_DURATION_MS > 0.0);
    assert!(BURN_MIN_DURATION_MS <= BURN_DURATION_MS);
    assert!(CLOSE_BUFFER_MS > 0.0);

    // The WebGL-absent fallback closes sooner than a full reveal would.
    assert!(CLOSE_FALLBACK_MS < BURN_DURATION_MS + CLOSE_BUFFER_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn burn_floor_leaves_headroom() {
    assert!(BURN_PROGRESS_FLOOR >= 0.0 && BURN_PROGRESS_FLOOR < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn progress_window_is_sane() {
    assert!(PROGRESS_START_VIEWPORT_FRAC > 0.0 && PROGRESS_START_VIEWPORT_FRAC < 1.0);
    assert!(PROGRESS_END_VIEWPORT_FRAC > 0.0 && PROGRESS_END_VIEWPORT_FRAC < 1.0);
    assert!(PROGRESS_SHOW_MIN < PROGRESS_SHOW_MAX);
    assert!(PROGRESS_SHOW_MIN > 0.0 && PROGRESS_SHOW_MAX < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_stagger_is_capped() {
    assert!(REVEAL_DELAY_STEP_MS > 0);
    assert!(REVEAL_DELAY_STEP_MS <= REVEAL_DELAY_MAX_MS);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn button_clamps_are_ordered() {
    assert!(BUTTON_DELTA_MIN_SEC > 0.0);
    assert!(BUTTON_DELTA_MIN_SEC < BUTTON_DELTA_MAX_SEC);
    assert!(BUTTON_STATIC_DELTA_SEC >= BUTTON_DELTA_MIN_SEC);
    assert!(BUTTON_STATIC_DELTA_SEC <= BUTTON_DELTA_MAX_SEC);
    assert!(BUTTON_PHASE_WRAP > 0.0);
    assert!(BUTTON_CANVAS_INSET_PX >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn backing_store_cap_keeps_native_resolution() {
    assert!(DPR_CAP >= 1.0);
}

#[test]
fn dom_contract_is_nonempty() {
    for s in [
        WELCOME_PARAM,
        WELCOME_VALUE,
        FALLBACK_WELCOME_HREF,
        GATE_PENDING_CLASS,
        GATE_OPEN_CLASS,
        GATE_ID,
        MAIN_MENU_SELECTOR,
        HERO_SELECTOR,
        HERO_MARKER_SELECTOR,
        ARTICLE_SELECTOR,
        CARD_SELECTOR,
        REVEAL_SELECTOR,
        REVEAL_ROOT_MARGIN,
        RAIN_FONT_FAMILY,
    ] {
        assert!(!s.is_empty());
    }
    assert!(FALLBACK_WELCOME_HREF.contains(WELCOME_PARAM));
}
