//! Option catalog endpoint

use axum::{extract::State, Json};
use hueprint_common::catalog::OptionCatalog;

use crate::AppState;

/// GET /api/options
///
/// Returns the intents and the three option pools, with pool sizes, so the
/// UI renders exactly the labels the mapping was tuned for.
pub async fn get_options(State(state): State<AppState>) -> Json<OptionCatalog> {
    Json(state.catalog.as_ref().clone())
}
