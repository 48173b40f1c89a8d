//! Error types for schema derivation

use thiserror::Error;

/// Errors that can occur while deriving a schema
#[derive(Debug, Error)]
pub enum DeriveError {
    /// A recognized logical type that has no Avro mapping yet
    #[error("Not supported: {type_name}")]
    NotSupported { type_name: String },

    /// A sequence or map type; these categories are not derived
    #[error("Not implemented: {kind} type {type_name}")]
    NotImplemented {
        type_name: String,
        kind: &'static str,
    },

    /// Nesting went deeper than the configured limit
    #[error("Maximum derivation depth {limit} exceeded at {type_name}")]
    DepthExceeded { type_name: String, limit: usize },

    /// Registry lookup miss
    #[error("Unknown type: {0}")]
    UnknownType(String),

    /// JSON rendering failure
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, DeriveError>;
