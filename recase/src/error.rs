//! API error types

use thiserror::Error;

/// API-level errors
///
/// Conversions themselves never fail; errors come from parsing case names
/// and configuration.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Case name not recognised
    #[error("unknown case: {0}")]
    UnknownCase(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML parse error
    #[cfg(feature = "serde")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
