// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_bare() {
    for id in [
        CURSOR_DOT_ID,
        CURSOR_RING_ID,
        LOGO_ID,
        LOADER_ID,
        LOADER_PERCENT_ID,
        LOADER_BAR_ID,
    ] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{} should be an id, not a selector", id);
        assert!(!id.contains(' '));
    }
}

#[test]
fn selectors_are_well_formed() {
    assert!(HOVER_TARGET_SELECTOR.starts_with('.'));
    for attr in [MAGNETIC_SELECTOR, MAGNETIC_BG_SELECTOR] {
        assert!(attr.starts_with('[') && attr.ends_with(']'));
    }
    assert_ne!(MAGNETIC_SELECTOR, MAGNETIC_BG_SELECTOR);
    assert!(COARSE_POINTER_QUERY.starts_with('(') && COARSE_POINTER_QUERY.ends_with(')'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn breakpoint_is_reasonable() {
    assert!(MOBILE_BREAKPOINT_PX > 320.0 && MOBILE_BREAKPOINT_PX < 1280.0);
}
