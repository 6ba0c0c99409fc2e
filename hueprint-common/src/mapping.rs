//! Onboarding → shader parameter pipeline
//!
//! Four stages, strictly forward:
//! 1. Hashing ([`crate::hash`])
//! 2. Selection normalization ([`crate::selection`])
//! 3. Axis derivation ([`crate::axes`])
//! 4. Parameter synthesis (this module and [`crate::palette`])
//!
//! Every call recomputes everything from the input. Nothing is cached, so
//! identical input always produces bit-identical output.

use tracing::{debug, warn};

use crate::axes::{derive_axes, AxisVector};
use crate::catalog::{PERSPECTIVE_POOL_SIZE, TONE_POOL_SIZE, TOPIC_POOL_SIZE};
use crate::color::{clamp01, color_from_label, lerp};
use crate::hash::hash_unit;
use crate::input::{OnboardingInput, SeedInput};
use crate::palette::synthesize_palette;
use crate::selection::summarize;
use crate::shader_params::{ShaderParams, EXTRA_COLOR_LIMIT};
use crate::weights::{BucketTable, Weights};

/// Hashed seeds are scaled into [0, 1000)
pub const SEED_SCALE: f64 = 1000.0;

/// Map onboarding answers to shader parameters.
///
/// Never fails: unknown intents, empty lists, and missing accent or seed all
/// have defined fallbacks.
pub fn map_onboarding(input: &OnboardingInput) -> ShaderParams {
    let perspective = summarize(&input.perspective_selections, PERSPECTIVE_POOL_SIZE);
    let tone = summarize(&input.tone_selections, TONE_POOL_SIZE);
    let topic = summarize(&input.topic_selections, TOPIC_POOL_SIZE);

    let axes = derive_axes(&input.intent, perspective, tone, topic);

    let texture_weights = BucketTable::ToneTexture.weights(&input.tone_selections);
    let motion_weights = BucketTable::TopicMotion.weights(&input.topic_selections);

    synthesize(&axes, input, texture_weights, motion_weights, tone.density)
}

/// Synthesize the final parameters from derived axes.
///
/// `input` supplies the perspective labels (extra colors), the accent, the
/// explicit seed, and the whole record for seed derivation.
pub fn synthesize(
    axes: &AxisVector,
    input: &OnboardingInput,
    texture_weights: Weights,
    motion_weights: Weights,
    tone_density: f64,
) -> ShaderParams {
    let palette = synthesize_palette(axes.warmth, axes.calm, input.accent_color);

    let extra_colors: Vec<_> = input
        .perspective_selections
        .iter()
        .map(|label| color_from_label(label))
        .collect();
    let extra_count = extra_colors.len().min(EXTRA_COLOR_LIMIT);

    ShaderParams {
        seed: resolve_seed(input),
        noise_scale: lerp(0.6, 4.2, 0.35 * axes.structure + 0.65 * axes.novelty),
        warp: lerp(0.0, 1.4, 0.6 * axes.novelty + 0.4 * axes.energy),
        speed: lerp(0.05, 0.75, axes.energy),
        contrast: lerp(0.8, 1.6, 0.5 * axes.focus + 0.5 * axes.structure),
        hue_shift: lerp(-0.25, 0.25, axes.warmth),
        grain: lerp(0.0, 0.25, 0.5 * axes.novelty + 0.5 * axes.texture),
        palette_a: palette.a,
        palette_b: palette.b,
        palette_c: palette.c,
        extra_colors,
        extra_count,
        texture_weights,
        texture_scale: clamp01(0.2 + 0.8 * tone_density),
        motion_weights,
    }
}

/// Resolve the output seed.
///
/// - Numeric seed: used as-is
/// - Non-empty string: `hash(seed) * 1000`
/// - Absent or empty string: `hash(stable_json(input)) * 1000`
pub fn resolve_seed(input: &OnboardingInput) -> f64 {
    match &input.seed {
        Some(SeedInput::Number(seed)) => *seed,
        Some(SeedInput::Text(text)) if !text.is_empty() => hash_unit(text) * SEED_SCALE,
        _ => {
            let json = input.stable_json().unwrap_or_else(|e| {
                warn!("Failed to serialize onboarding input for seed derivation: {}", e);
                String::new()
            });
            debug!("No explicit seed, deriving from input ({} bytes)", json.len());
            hash_unit(&json) * SEED_SCALE
        }
    }
}
