//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key in the explicit options or the environment.
    #[error(
        "Missing SPEKTRUM_API_KEY. Set it in your environment or pass an api_key in the client options."
    )]
    MissingApiKey,

    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),
}
