//! Axis derivation
//!
//! Combines the intent's base row with the three selection summaries into
//! six axes plus texture. Each axis is clamped once, after all of its terms
//! are summed; individual terms are never clamped.

use serde::Serialize;

use crate::color::clamp01;
use crate::intent::base_axes_for;
use crate::selection::SelectionSummary;

/// Six-axis base row selected by intent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaseAxes {
    pub energy: f64,
    pub calm: f64,
    pub novelty: f64,
    pub focus: f64,
    pub warmth: f64,
    pub structure: f64,
}

/// Derived axes, all in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisVector {
    pub energy: f64,
    pub calm: f64,
    pub novelty: f64,
    pub focus: f64,
    pub warmth: f64,
    pub structure: f64,
    /// Derived from perspective and topic variety, not from the intent row
    pub texture: f64,
}

/// Derive the axis vector for an intent label and the three selection
/// summaries.
///
/// Unknown intents start from the neutral row; see [`base_axes_for`].
pub fn derive_axes(
    intent: &str,
    perspective: SelectionSummary,
    tone: SelectionSummary,
    topic: SelectionSummary,
) -> AxisVector {
    apply_adjustments(base_axes_for(intent), perspective, tone, topic)
}

/// Apply the selection-driven adjustments to a base row.
pub fn apply_adjustments(
    base: BaseAxes,
    perspective: SelectionSummary,
    tone: SelectionSummary,
    topic: SelectionSummary,
) -> AxisVector {
    AxisVector {
        energy: clamp01(base.energy + 0.25 * perspective.density + 0.15 * topic.density),
        calm: clamp01(base.calm + 0.2 * (1.0 - perspective.density) + 0.1 * tone.variety),
        novelty: clamp01(base.novelty + 0.3 * perspective.variety + 0.2 * topic.variety),
        focus: clamp01(base.focus + 0.35 * tone.density - 0.15 * perspective.variety),
        warmth: clamp01(base.warmth + 0.2 * topic.density),
        structure: clamp01(base.structure + 0.35 * tone.density),
        texture: clamp01(0.4 + 0.3 * perspective.variety + 0.3 * topic.variety),
    }
}
