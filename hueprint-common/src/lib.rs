//! # Hueprint Common Library
//!
//! Shared code for the Hueprint onboarding-to-shader mapping:
//! - Deterministic label hashing and label colors
//! - Selection normalization (density / variety)
//! - Tone and topic bucket accumulation into weight vectors
//! - Axis derivation from intent and selections
//! - Palette and final shader parameter synthesis
//! - Option catalog presented to the onboarding UI
//! - Configuration loading and the shared error type
//!
//! The mapping is a pure function: [`map_onboarding`] re-runs the whole
//! pipeline on every call and holds no state between calls.

pub mod axes;
pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod hash;
pub mod input;
pub mod intent;
pub mod mapping;
pub mod palette;
pub mod selection;
pub mod shader_params;
pub mod weights;

pub use axes::AxisVector;
pub use error::{Error, Result};
pub use input::{OnboardingInput, SeedInput};
pub use intent::Intent;
pub use mapping::map_onboarding;
pub use shader_params::ShaderParams;
