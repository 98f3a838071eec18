//! Error types for cwpscan

use thiserror::Error;

/// Result type alias for cwpscan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unable to acquire token with error code: {status}")]
    AuthenticationFailed { status: u16 },

    #[error("No token available, not requesting scans")]
    MissingToken,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect to API: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing {0}")]
    Missing(String),
}
