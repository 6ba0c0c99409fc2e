//! HTTP API handlers for hueprint-ps

pub mod health;
pub mod options;
pub mod params;

pub use health::health_routes;
pub use options::get_options;
pub use params::map_params;
