//! Color and interpolation helpers
//!
//! Colors are linear `[r, g, b]` triples in [0, 1], the shape the renderer
//! binds directly to `vec3` uniforms.

use crate::hash::hash_unit;

/// RGB triple, each channel nominally in [0, 1]
pub type Rgb = [f64; 3];

/// Saturation used for label-derived colors
pub const LABEL_SATURATION: f64 = 0.65;

/// Value (brightness) used for label-derived colors
pub const LABEL_VALUE: f64 = 0.95;

/// Standard linear interpolation `a + (b - a) * t`.
///
/// `t` is not clamped; callers pass values already in [0, 1].
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Channel-wise [`lerp`] between two colors.
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
}

/// Convert HSV to RGB.
///
/// `hue` is in degrees and wraps; `saturation` and `value` are in [0, 1].
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let h = hue.rem_euclid(360.0) / 60.0;
    let chroma = value * saturation;
    let x = chroma * (1.0 - ((h % 2.0) - 1.0).abs());
    let m = value - chroma;

    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// Deterministic vivid color for a label.
///
/// The label hash picks the hue; saturation and value are fixed so every
/// label color shares the same intensity.
pub fn color_from_label(label: &str) -> Rgb {
    hsv_to_rgb(hash_unit(label) * 360.0, LABEL_SATURATION, LABEL_VALUE)
}
