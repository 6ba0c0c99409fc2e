//! Base palette synthesis
//!
//! Three palette slots (A, B, C) are interpolated between a cool and a warm
//! endpoint by the warmth axis. An accent color, when given, pulls A and B
//! toward it; otherwise the calm axis brightens or dims slot A.

use serde::Serialize;

use crate::color::{clamp01, lerp, lerp_rgb, Rgb};

pub const COOL_A: Rgb = [0.20, 0.36, 0.78];
pub const WARM_A: Rgb = [0.96, 0.52, 0.30];
pub const COOL_B: Rgb = [0.12, 0.66, 0.72];
pub const WARM_B: Rgb = [0.98, 0.80, 0.42];
pub const COOL_C: Rgb = [0.05, 0.07, 0.18];
pub const WARM_C: Rgb = [0.20, 0.07, 0.10];

/// How far slot A moves toward the accent
pub const ACCENT_MIX_A: f64 = 0.6;

/// How far slot B moves toward the accent
pub const ACCENT_MIX_B: f64 = 0.3;

/// Three-slot base palette
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    pub a: Rgb,
    pub b: Rgb,
    pub c: Rgb,
}

/// Synthesize the base palette.
///
/// # Arguments
/// * `warmth` - Warmth axis, 0.0 (cool endpoints) to 1.0 (warm endpoints)
/// * `calm` - Calm axis; only used when no accent is given
/// * `accent` - Optional accent color; slot C is never touched by it
pub fn synthesize_palette(warmth: f64, calm: f64, accent: Option<Rgb>) -> Palette {
    let base_a = lerp_rgb(COOL_A, WARM_A, warmth);
    let base_b = lerp_rgb(COOL_B, WARM_B, warmth);
    let base_c = lerp_rgb(COOL_C, WARM_C, warmth);

    match accent {
        Some(accent) => Palette {
            a: lerp_rgb(base_a, accent, ACCENT_MIX_A),
            b: lerp_rgb(base_b, accent, ACCENT_MIX_B),
            c: base_c,
        },
        None => {
            // Low calm brightens A, high calm dims it
            let calm_shift = lerp(0.85, 1.15, 1.0 - calm);
            Palette {
                a: base_a.map(|channel| clamp01(channel * calm_shift)),
                b: base_b,
                c: base_c,
            }
        }
    }
}
