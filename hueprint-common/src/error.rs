//! Common error types for Hueprint

use thiserror::Error;

/// Common result type for Hueprint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Hueprint crates
///
/// The mapping itself never returns an error; these cover configuration
/// loading and input validation at the service and CLI boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML config file could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller supplied an onboarding input outside its contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
