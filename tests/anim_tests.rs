// Host-side tests for the pure animation math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/anim.rs"]
mod anim;

use anim::*;

#[test]
fn ease_in_out_endpoints_and_midpoint() {
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(1.0), 1.0);
    assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn ease_in_out_is_monotonic_and_symmetric() {
    let mut prev = ease_in_out(0.0);
    for i in 1..=100 {
        let t = i as f32 / 100.0;
        let v = ease_in_out(t);
        assert!(v >= prev, "not monotonic at t={t}");
        prev = v;
    }
    for i in 0..=50 {
        let t = i as f32 / 100.0;
        let sum = ease_in_out(t) + ease_in_out(1.0 - t);
        assert!((sum - 1.0).abs() < 1e-5, "asymmetric at t={t}");
    }
}

#[test]
fn approach_moves_toward_target() {
    let next = approach(0.0, 10.0, 1.0, 0.1);
    assert!(next > 0.0 && next < 10.0);

    let back = approach(10.0, 0.0, 1.0, 0.1);
    assert!(back < 10.0 && back > 0.0);
}

#[test]
fn approach_converges() {
    let mut v = 0.0;
    for _ in 0..1000 {
        v = approach(v, 1.0, 0.26, 1.0 / 60.0);
    }
    assert!((v - 1.0).abs() < 1e-3);
}

#[test]
fn approach_zero_delta_is_identity() {
    assert_eq!(approach(0.4, 1.0, 0.26, 0.0), 0.4);
}

#[test]
fn approach_floors_nonpositive_duration() {
    let v = approach(0.0, 1.0, 0.0, 1.0 / 60.0);
    assert!(v.is_finite());
    assert!(v > 0.99, "floored duration should snap, got {v}");
}

#[test]
fn burn_progress_spans_floor_to_one() {
    assert!((burn_progress(0.0, 0.3) - 0.3).abs() < 1e-6);
    assert!((burn_progress(1.0, 0.3) - 1.0).abs() < 1e-6);
    let mut prev = burn_progress(0.0, 0.3);
    for i in 1..=50 {
        let v = burn_progress(i as f32 / 50.0, 0.3);
        assert!(v >= prev);
        prev = v;
    }
    // Out-of-range input clamps rather than overshooting.
    assert!((burn_progress(1.5, 0.3) - 1.0).abs() < 1e-6);
    assert!((burn_progress(-0.5, 0.3) - 0.3).abs() < 1e-6);
}

#[test]
fn progress_fraction_boundaries() {
    let viewport = 800.0;
    let top = 1000.0;
    let height = 2000.0;
    let start = top - viewport * 0.18;
    let end = top + height - viewport * 0.55;

    let at = |y: f64| progress_fraction(y, top, height, viewport, 0.18, 0.55);

    assert_eq!(at(start), 0.0);
    assert_eq!(at(start - 500.0), 0.0);
    assert_eq!(at(end), 1.0);
    assert_eq!(at(end + 500.0), 1.0);
    let mid = at((start + end) / 2.0);
    assert!((mid - 0.5).abs() < 1e-9);
}

#[test]
fn progress_fraction_degenerate_window_stays_clamped() {
    // A zero-height article puts the end before the start; the guard keeps
    // the division finite and the clamp holds.
    let v = progress_fraction(5000.0, 1000.0, 0.0, 800.0, 0.18, 0.55);
    assert!((0.0..=1.0).contains(&v));
    let w = progress_fraction(-5000.0, 1000.0, 0.0, 800.0, 0.18, 0.55);
    assert!((0.0..=1.0).contains(&w));
}

#[test]
fn reveal_delay_staggers_and_caps() {
    assert_eq!(reveal_delay_ms(0, 45, 240), 0);
    assert_eq!(reveal_delay_ms(1, 45, 240), 45);
    assert_eq!(reveal_delay_ms(5, 45, 240), 225);
    assert_eq!(reveal_delay_ms(6, 45, 240), 240);
    assert_eq!(reveal_delay_ms(100, 45, 240), 240);
}

#[test]
fn button_params_ease_toward_active() {
    let mut params = BUTTON_RESTING;
    params.approach_toward(&BUTTON_ACTIVE, BUTTON_PRESS_EASE_SEC, 1.0 / 60.0);
    assert!(params.speed > BUTTON_RESTING.speed);
    assert!(params.amplitude < BUTTON_RESTING.amplitude);
    assert!(params.pulse_max > BUTTON_RESTING.pulse_max);

    for _ in 0..2000 {
        params.approach_toward(&BUTTON_ACTIVE, BUTTON_PRESS_EASE_SEC, 1.0 / 60.0);
    }
    assert!((params.speed - BUTTON_ACTIVE.speed).abs() < 1e-2);
    assert!((params.amplitude - BUTTON_ACTIVE.amplitude).abs() < 1e-1);
}

#[test]
fn button_release_is_slower_than_press() {
    let mut pressed = BUTTON_RESTING;
    pressed.approach_toward(&BUTTON_ACTIVE, BUTTON_PRESS_EASE_SEC, 1.0 / 60.0);
    let press_step = (pressed.speed - BUTTON_RESTING.speed).abs();

    let mut released = BUTTON_ACTIVE;
    released.approach_toward(&BUTTON_RESTING, BUTTON_RELEASE_EASE_SEC, 1.0 / 60.0);
    let release_step = (released.speed - BUTTON_ACTIVE.speed).abs();

    assert!(press_step > release_step);
}
