#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preference_is_light_outside_the_browser() {
    assert!(!detect_dark_preference());
}

#[test]
fn any_query_is_unmatched_outside_the_browser() {
    assert!(!matches_media("(prefers-color-scheme: dark)"));
    assert!(!matches_media(""));
}
