// Host-side tests for the gate lifecycle machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/state.rs"]
mod state;

use state::*;

#[test]
fn opens_only_from_inert() {
    let mut m = GateMachine::new();
    assert_eq!(m.state(), GateState::Inert);
    assert!(m.open());
    assert_eq!(m.state(), GateState::Open);
    assert!(!m.open());
}

#[test]
fn begin_burn_is_single_fire() {
    let mut m = GateMachine::new();
    m.open();
    assert!(m.begin_burn());
    assert_eq!(m.state(), GateState::Burning);
    // A second click or Enter while burning must not re-trigger.
    assert!(!m.begin_burn());
}

#[test]
fn begin_burn_requires_open() {
    let mut m = GateMachine::new();
    assert!(!m.begin_burn());
    assert_eq!(m.state(), GateState::Inert);
}

#[test]
fn close_is_idempotent() {
    let mut m = GateMachine::new();
    m.open();
    m.begin_burn();
    assert!(m.close());
    assert_eq!(m.state(), GateState::Closed);
    // The teardown path must run exactly once.
    assert!(!m.close());
}

#[test]
fn close_from_open_covers_reduced_motion() {
    let mut m = GateMachine::new();
    m.open();
    assert!(m.close());
    assert_eq!(m.state(), GateState::Closed);
}

#[test]
fn closed_gate_never_reopens() {
    let mut m = GateMachine::new();
    m.open();
    m.begin_burn();
    m.close();
    assert!(!m.open());
    assert!(!m.begin_burn());
    assert_eq!(m.state(), GateState::Closed);
}

#[test]
fn default_is_inert() {
    assert_eq!(GateMachine::default().state(), GateState::Inert);
}
