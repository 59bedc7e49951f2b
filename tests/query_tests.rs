// Host-side tests for the query-string helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/query.rs"]
mod query;

use query::*;

#[test]
fn set_adds_flag_to_empty_search() {
    assert_eq!(set_param("", "welcome", "1"), "welcome=1");
    assert_eq!(set_param("?", "welcome", "1"), "welcome=1");
}

#[test]
fn set_preserves_existing_params_and_order() {
    assert_eq!(set_param("?a=1&b=2", "welcome", "1"), "a=1&b=2&welcome=1");
}

#[test]
fn set_replaces_in_place() {
    assert_eq!(
        set_param("?a=1&welcome=0&b=2", "welcome", "1"),
        "a=1&welcome=1&b=2"
    );
}

#[test]
fn set_collapses_duplicate_keys() {
    assert_eq!(
        set_param("welcome=0&a=1&welcome=2", "welcome", "1"),
        "welcome=1&a=1"
    );
}

#[test]
fn remove_preserves_other_params_order_and_values() {
    assert_eq!(remove_param("?welcome=1&a=1&b=2", "welcome"), "a=1&b=2");
    assert_eq!(remove_param("?a=1&welcome=1&b=2", "welcome"), "a=1&b=2");
    assert_eq!(remove_param("?b=2&a=1&welcome=1", "welcome"), "b=2&a=1");
}

#[test]
fn remove_without_flag_is_identity() {
    assert_eq!(remove_param("?a=1&b=2", "welcome"), "a=1&b=2");
    assert_eq!(remove_param("", "welcome"), "");
}

#[test]
fn has_param_matches_key_not_value() {
    assert!(has_param("?welcome=1", "welcome"));
    assert!(has_param("welcome", "welcome"));
    assert!(!has_param("?welcomed=1", "welcome"));
    assert!(!has_param("?a=welcome", "welcome"));
    assert!(!has_param("", "welcome"));
}

#[test]
fn compose_href_variants() {
    assert_eq!(compose_href("/", "", ""), "/");
    assert_eq!(compose_href("/posts/x/", "a=1", "#top"), "/posts/x/?a=1#top");
    assert_eq!(compose_href("/", "", "#frag"), "/#frag");
    assert_eq!(compose_href("/about/", "welcome=1", ""), "/about/?welcome=1");
}

#[test]
fn set_then_remove_round_trips_other_params() {
    let with_flag = set_param("?a=1&b=2", "welcome", "1");
    assert_eq!(remove_param(&with_flag, "welcome"), "a=1&b=2");
}

#[test]
fn tags_paths() {
    assert!(is_tags_path("/tags/"));
    assert!(is_tags_path("/tags/rust/"));
    assert!(!is_tags_path("/posts/tags/"));
    assert!(!is_tags_path("/"));
}
