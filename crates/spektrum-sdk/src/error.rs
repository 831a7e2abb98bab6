//! Client error types.

use spektrum_config::ConfigError;
use thiserror::Error;

use crate::http::ResponseBody;

/// Errors that can occur when using the Spektrum client.
#[derive(Debug, Error)]
pub enum SpektrumError {
    /// The client could not be configured (no API key).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API answered with a non-success status code.
    #[error("Request failed: {status}")]
    Request {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, decoded as JSON when possible.
        body: ResponseBody,
    },

    /// HTTP transport error, passed through untouched.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A successful response did not match the expected type.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A header name or value is not valid HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

impl SpektrumError {
    /// HTTP status for [`SpektrumError::Request`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body for [`SpektrumError::Request`] errors.
    #[must_use]
    pub const fn body(&self) -> Option<&ResponseBody> {
        match self {
            Self::Request { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, SpektrumError>;
