//! hueprint-ps library - Parameter Service module
//!
//! Exposes the onboarding → shader parameter mapping over HTTP so a browser
//! collaborator can post its answers and bind the returned uniforms.

use std::sync::Arc;

use axum::Router;
use hueprint_common::catalog::OptionCatalog;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod oneshot;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Option pools served to the onboarding UI
    pub catalog: Arc<OptionCatalog>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: OptionCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(OptionCatalog::standard())
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let api = Router::new()
        .route("/api/options", get(api::get_options))
        .route("/api/params", post(api::map_params));

    Router::new()
        .merge(api)
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Browser collaborator may be served from another origin
        .layer(CorsLayer::permissive())
}
