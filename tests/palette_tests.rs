// Host-side tests for the painter's colour strings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/palette.rs"]
mod palette;

use palette::*;

#[test]
fn rgba_formats_css() {
    assert_eq!(rgba([100, 150, 255], 0.5), "rgba(100, 150, 255, 0.5)");
    assert_eq!(rgba([0, 0, 0], 2.0), "rgba(0, 0, 0, 1)");
}

#[test]
fn hsla_formats_css() {
    assert_eq!(hsla(210.0, 100.0, 50.0, 0.8), "hsla(210, 100%, 50%, 0.8)");
    assert_eq!(hsla(240.0, 100.0, 40.0, -1.0), "hsla(240, 100%, 40%, 0)");
}

#[test]
fn tint_goes_from_black_to_blue() {
    assert_eq!(tinted(0.0), "rgba(0, 0, 0, 1)");
    assert_eq!(tinted(1.0), "rgba(0, 0, 255, 1)");
    assert_eq!(tinted(0.3), "rgba(0, 0, 76, 1)");
}
