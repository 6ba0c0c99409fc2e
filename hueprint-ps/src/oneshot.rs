//! One-shot mapping for the `hueprint-map` command line tool
//!
//! Reads a single onboarding input as JSON, validates it, and renders the
//! shader parameters back as JSON.

use std::io::Read;
use std::path::Path;

use hueprint_common::{map_onboarding, OnboardingInput, Result};

/// Read the raw input JSON from `path`, or from stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parse, validate, and map one input document.
pub fn map_json(json: &str, pretty: bool) -> Result<String> {
    let input: OnboardingInput = serde_json::from_str(json)?;
    input.validate()?;

    let params = map_onboarding(&input);
    let rendered = if pretty {
        serde_json::to_string_pretty(&params)?
    } else {
        serde_json::to_string(&params)?
    };
    Ok(rendered)
}
