//! Onboarding intents and their base axis rows
//!
//! The intent is the single top-level choice of the questionnaire. Each of
//! the five canonical intents seeds the six axes with a fixed row; any other
//! label degrades to a flat neutral row instead of failing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axes::BaseAxes;

/// Value of every axis in the neutral row used for unrecognized intents
pub const NEUTRAL_AXIS_VALUE: f64 = 0.55;

/// Neutral base row for unknown or missing intents
pub const NEUTRAL_BASE: BaseAxes = BaseAxes {
    energy: NEUTRAL_AXIS_VALUE,
    calm: NEUTRAL_AXIS_VALUE,
    novelty: NEUTRAL_AXIS_VALUE,
    focus: NEUTRAL_AXIS_VALUE,
    warmth: NEUTRAL_AXIS_VALUE,
    structure: NEUTRAL_AXIS_VALUE,
};

/// Canonical onboarding intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Exploration,
    Relaxation,
    Focus,
    Connection,
    Inspiration,
}

impl Intent {
    /// Parse an intent from its UI label.
    ///
    /// Matching is exact; the UI sends labels verbatim.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Exploration" => Some(Intent::Exploration),
            "Relaxation" => Some(Intent::Relaxation),
            "Focus" => Some(Intent::Focus),
            "Connection" => Some(Intent::Connection),
            "Inspiration" => Some(Intent::Inspiration),
            _ => None,
        }
    }

    /// UI label for this intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Exploration => "Exploration",
            Intent::Relaxation => "Relaxation",
            Intent::Focus => "Focus",
            Intent::Connection => "Connection",
            Intent::Inspiration => "Inspiration",
        }
    }

    /// Base axis row for this intent
    pub fn base_axes(&self) -> BaseAxes {
        match self {
            Intent::Exploration => BaseAxes {
                energy: 0.6,
                calm: 0.5,
                novelty: 0.9,
                focus: 0.4,
                warmth: 0.55,
                structure: 0.35,
            },
            Intent::Relaxation => BaseAxes {
                energy: 0.25,
                calm: 0.85,
                novelty: 0.35,
                focus: 0.4,
                warmth: 0.65,
                structure: 0.45,
            },
            Intent::Focus => BaseAxes {
                energy: 0.45,
                calm: 0.6,
                novelty: 0.3,
                focus: 0.9,
                warmth: 0.4,
                structure: 0.8,
            },
            Intent::Connection => BaseAxes {
                energy: 0.55,
                calm: 0.6,
                novelty: 0.45,
                focus: 0.5,
                warmth: 0.9,
                structure: 0.5,
            },
            Intent::Inspiration => BaseAxes {
                energy: 0.8,
                calm: 0.35,
                novelty: 0.8,
                focus: 0.5,
                warmth: 0.6,
                structure: 0.3,
            },
        }
    }

    /// Get all intents in UI presentation order
    pub fn all_variants() -> &'static [Intent] {
        &[
            Intent::Exploration,
            Intent::Relaxation,
            Intent::Focus,
            Intent::Connection,
            Intent::Inspiration,
        ]
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Base axis row for an arbitrary intent label.
///
/// Unrecognized labels (including the empty string) map to [`NEUTRAL_BASE`].
pub fn base_axes_for(label: &str) -> BaseAxes {
    match Intent::from_label(label) {
        Some(intent) => intent.base_axes(),
        None => {
            debug!("Unrecognized intent '{}', using neutral base axes", label);
            NEUTRAL_BASE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for intent in Intent::all_variants() {
            assert_eq!(Intent::from_label(intent.label()), Some(*intent));
        }
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(Intent::from_label("Unknown Value"), None);
        assert_eq!(Intent::from_label(""), None);
        assert_eq!(Intent::from_label("exploration"), None);
    }

    #[test]
    fn test_exploration_row() {
        let row = Intent::Exploration.base_axes();
        assert_eq!(row.energy, 0.6);
        assert_eq!(row.calm, 0.5);
        assert_eq!(row.novelty, 0.9);
        assert_eq!(row.focus, 0.4);
        assert_eq!(row.warmth, 0.55);
        assert_eq!(row.structure, 0.35);
    }

    #[test]
    fn test_unknown_intent_is_neutral() {
        assert_eq!(base_axes_for("Unknown Value"), NEUTRAL_BASE);
        assert_eq!(base_axes_for(""), NEUTRAL_BASE);
    }

    #[test]
    fn test_rows_in_unit_range() {
        for intent in Intent::all_variants() {
            let row = intent.base_axes();
            for value in [row.energy, row.calm, row.novelty, row.focus, row.warmth, row.structure] {
                assert!((0.0..=1.0).contains(&value), "{} row out of range", intent);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Intent::Connection), "Connection");
    }
}
