// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn shape_urls_are_distinct_svgs() {
    for url in SHAPE_URLS {
        assert!(url.starts_with('/'), "{url} should be site-absolute");
        assert!(url.ends_with(".svg"), "{url} should be an svg");
    }
    for (i, a) in SHAPE_URLS.iter().enumerate() {
        assert!(!SHAPE_URLS[i + 1..].contains(a), "{a} listed twice");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_is_usable() {
    assert!(CANVAS_SIZE_PX > 0);
    assert!(!CANVAS_ID.is_empty());
}

#[test]
fn glow_stops_run_from_center_to_transparent_edge() {
    assert!(GLOW_STOPS.windows(2).all(|w| w[0].0 < w[1].0));
    assert_eq!(GLOW_STOPS.first().map(|s| s.0), Some(0.0));
    assert_eq!(GLOW_STOPS.last().map(|s| (s.0, s.3)), Some((1.0, 0.0)));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_gradient_stop_is_interior() {
    assert!(TRAIL_MID_STOP > 0.0 && TRAIL_MID_STOP < 1.0);
    assert!(TRAIL_MID_ALPHA > 0.0 && TRAIL_MID_ALPHA <= 1.0);
    assert!(SPARK_GLOW_SCALE > 1.0);
}
