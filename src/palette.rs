//! CSS colour strings for the painter.

#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha.clamp(0.0, 1.0))
}

#[inline]
pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> String {
    format!(
        "hsla({}, {}%, {}%, {})",
        hue,
        saturation,
        lightness,
        alpha.clamp(0.0, 1.0)
    )
}

/// Fill for a slow influenced particle: black shading into blue.
#[inline]
pub fn tinted(blue: f32) -> String {
    rgba([0, 0, (blue.clamp(0.0, 1.0) * 255.0) as u8], 1.0)
}
