//! Shader parameter mapping endpoint

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hueprint_common::{map_onboarding, Error, OnboardingInput, ShaderParams};
use serde_json::json;
use tracing::debug;

/// POST /api/params
///
/// Validates the posted onboarding answers and returns the mapped shader
/// parameters. Malformed JSON is rejected by the `Json` extractor before
/// this handler runs.
pub async fn map_params(
    Json(input): Json<OnboardingInput>,
) -> Result<Json<ShaderParams>, ParamsError> {
    input.validate()?;

    let params = map_onboarding(&input);
    debug!(
        "Mapped intent '{}' ({} perspectives, {} tones, {} topics) to seed {}",
        input.intent,
        input.perspective_selections.len(),
        input.tone_selections.len(),
        input.topic_selections.len(),
        params.seed
    );

    Ok(Json(params))
}

/// Errors returned by the mapping endpoint
///
/// Mapping itself never fails, so validation is the only error source.
#[derive(Debug)]
pub enum ParamsError {
    InvalidInput(String),
}

impl From<Error> for ParamsError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => ParamsError::InvalidInput(msg),
            other => ParamsError::InvalidInput(other.to_string()),
        }
    }
}

impl IntoResponse for ParamsError {
    fn into_response(self) -> Response {
        let ParamsError::InvalidInput(msg) = self;
        let body = Json(json!({
            "error": format!("Invalid input: {}", msg),
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
