//! Error types for internalgraph.

use thiserror::Error;

use crate::config::ConfigError;

/// Graph error types.
///
/// Every failure is a programming or input error surfaced to the immediate
/// caller; nothing here is retryable.
#[derive(Error, Debug)]
pub enum Error {
    /// A required property is absent from the element's property bag.
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    /// An operation received an unusable argument (e.g. an empty key list).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A property value has no representation in the export formats.
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// JSON rendering failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Loading or validating configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
