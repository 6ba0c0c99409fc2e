//! Onboarding input record
//!
//! Field names serialize in camelCase so the browser collaborator can post
//! its plain answer object unchanged. Null or missing selection lists read as
//! empty lists, an empty accent array reads as no accent, and a seed that is
//! neither a number nor a string reads as absent.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::color::Rgb;
use crate::{Error, Result};

/// Longest selection list accepted by [`OnboardingInput::validate`]
pub const MAX_SELECTIONS: usize = 64;

/// Explicit seed supplied by the caller
///
/// Read through the lenient field deserializer on [`OnboardingInput::seed`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeedInput {
    /// Used as the output seed unchanged
    Number(f64),
    /// Hashed into the output seed; an empty string counts as absent
    Text(String),
}

/// Answers gathered by the onboarding questionnaire
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub intent: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub perspective_selections: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tone_selections: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub topic_selections: Vec<String>,

    /// Optional accent color; `None` derives the palette from the axes only
    #[serde(default, deserialize_with = "lenient_accent")]
    pub accent_color: Option<Rgb>,

    /// Optional seed; `None` derives the seed by hashing the whole input
    #[serde(default, deserialize_with = "lenient_seed")]
    pub seed: Option<SeedInput>,
}

impl OnboardingInput {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Self::default()
        }
    }

    pub fn with_perspectives<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.perspective_selections = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tones<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.tone_selections = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_topics<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.topic_selections = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_accent(mut self, accent: Rgb) -> Self {
        self.accent_color = Some(accent);
        self
    }

    pub fn with_seed(mut self, seed: SeedInput) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Compact JSON rendering with fields in declaration order.
    ///
    /// Hashed to derive the seed when none is supplied, so any change to any
    /// field changes the derived seed.
    pub fn stable_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the input against the caller contract.
    ///
    /// The mapping never calls this; it tolerates any input. The service and
    /// CLI reject contract violations before mapping instead of producing
    /// out-of-range uniforms.
    pub fn validate(&self) -> Result<()> {
        if let Some(accent) = self.accent_color {
            if let Some(bad) = accent.iter().find(|c| !c.is_finite() || !(0.0..=1.0).contains(*c)) {
                return Err(Error::InvalidInput(format!(
                    "accentColor components must be within [0, 1], got {}",
                    bad
                )));
            }
        }

        if let Some(SeedInput::Number(seed)) = self.seed {
            if !seed.is_finite() {
                return Err(Error::InvalidInput("seed must be a finite number".to_string()));
            }
        }

        for (field, list) in [
            ("perspectiveSelections", &self.perspective_selections),
            ("toneSelections", &self.tone_selections),
            ("topicSelections", &self.topic_selections),
        ] {
            if list.len() > MAX_SELECTIONS {
                return Err(Error::InvalidInput(format!(
                    "{} has {} entries (max {})",
                    field,
                    list.len(),
                    MAX_SELECTIONS
                )));
            }
        }

        Ok(())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_accent<'de, D>(deserializer: D) -> std::result::Result<Option<Rgb>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Vec<f64>>::deserialize(deserializer)?.as_deref() {
        None | Some([]) => Ok(None),
        Some(&[r, g, b]) => Ok(Some([r, g, b])),
        Some(other) => Err(D::Error::invalid_length(
            other.len(),
            &"an empty array or an array of 3 components",
        )),
    }
}

fn lenient_seed<'de, D>(deserializer: D) -> std::result::Result<Option<SeedInput>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().map(SeedInput::Number),
        Value::String(s) => Some(SeedInput::Text(s)),
        _ => None,
    })
}
