//! # spektrum-config
//!
//! API key and endpoint resolution for the Spektrum SDK, layered with figment.
//!
//! Each field resolves independently (highest wins):
//! 1. Explicit [`ClientOptions`] values
//! 2. Environment variables (`SPEKTRUM_API_KEY`, `SPEKTRUM_ENDPOINT`)
//! 3. Built-in default (endpoint only: `https://platform.jigjoy.ai`)
//!
//! The endpoint is normalized by stripping trailing slashes. A missing API key
//! is a construction-time [`ConfigError::MissingApiKey`]; nothing here touches
//! the network.
//!
//! # Usage
//!
//! ```no_run
//! use spektrum_config::ClientOptions;
//!
//! // Options first, then SPEKTRUM_* from the process environment:
//! let config = ClientOptions::new().resolve().expect("config");
//!
//! // Explicit values win over the environment:
//! let config = ClientOptions::new()
//!     .with_api_key("sk-live-123")
//!     .with_endpoint("https://staging.example.com/")
//!     .resolve()
//!     .expect("config");
//! assert_eq!(config.endpoint(), "https://staging.example.com");
//! ```

mod env;
mod error;

pub use env::{API_KEY_VAR, ENDPOINT_VAR, EnvSource, ProcessEnv};
pub use error::ConfigError;

use figment::{Figment, providers::Serialized};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Endpoint used when neither the options nor the environment name one.
pub const DEFAULT_ENDPOINT: &str = "https://platform.jigjoy.ai";

/// Caller-supplied client options. Unset fields fall back to the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ClientOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Read both fields from an environment source.
    #[must_use]
    pub fn from_env(env: &impl EnvSource) -> Self {
        Self {
            api_key: env.var(API_KEY_VAR),
            endpoint: env.var(ENDPOINT_VAR),
        }
    }

    /// Resolve against the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no API key is available.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        self.resolve_from(&ProcessEnv)
    }

    /// Resolve against the process environment after loading `.env` from the
    /// current directory. A missing `.env` file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no API key is available.
    pub fn resolve_with_dotenv(&self) -> Result<ResolvedConfig, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
        }
        self.resolve()
    }

    /// Resolve against an arbitrary environment source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no API key is available, or
    /// [`ConfigError::Figment`] if the layered values cannot be extracted.
    pub fn resolve_from(&self, env: &impl EnvSource) -> Result<ResolvedConfig, ConfigError> {
        let layered: Self = self.figment(env).extract()?;
        let api_key = layered
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let endpoint = layered
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(ResolvedConfig::from_parts(&endpoint, api_key))
    }

    /// Build the figment provider chain for these options over `env`.
    ///
    /// This is public so callers can inspect the figment directly or merge
    /// additional providers before extracting.
    pub fn figment(&self, env: &impl EnvSource) -> Figment {
        let defaults = Self {
            api_key: None,
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
        };

        Figment::from(Serialized::defaults(defaults))
            .merge(Serialized::defaults(Self::from_env(env)))
            .merge(Serialized::defaults(self.clone()))
    }
}

/// A fully resolved endpoint and API key. Read-only once built.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    endpoint: String,
    api_key: String,
}

impl ResolvedConfig {
    /// Build a config from known values, applying endpoint normalization.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if `api_key` is empty.
    pub fn new(endpoint: &str, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self::from_parts(endpoint, api_key))
    }

    fn from_parts(endpoint: &str, api_key: String) -> Self {
        Self {
            endpoint: normalize_endpoint(endpoint).to_string(),
            api_key,
        }
    }

    /// Base URL with no trailing slash.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Strip every trailing `/` from an endpoint.
#[must_use]
pub fn normalize_endpoint(endpoint: &str) -> &str {
    endpoint.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NO_ENV: [(&str, &str); 0] = [];

    #[test]
    fn missing_key_fails_without_env() {
        let result = ClientOptions::new().resolve_from(&NO_ENV);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn missing_key_fails_regardless_of_endpoint() {
        let options = ClientOptions::new().with_endpoint("https://x.com");
        let env = [(ENDPOINT_VAR, "https://y.com")];
        assert!(matches!(
            options.resolve_from(&env),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn env_key_is_used_when_no_option() {
        let env = [(API_KEY_VAR, "env-key")];
        let config = ClientOptions::new().resolve_from(&env).unwrap();
        assert_eq!(config.api_key(), "env-key");
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn explicit_options_beat_env() {
        let env = [(API_KEY_VAR, "env-key"), (ENDPOINT_VAR, "https://env.example.com")];
        let config = ClientOptions::new()
            .with_api_key("opt-key")
            .with_endpoint("https://opt.example.com")
            .resolve_from(&env)
            .unwrap();
        assert_eq!(config.api_key(), "opt-key");
        assert_eq!(config.endpoint(), "https://opt.example.com");
    }

    #[test]
    fn env_endpoint_beats_default() {
        let env = [(API_KEY_VAR, "k"), (ENDPOINT_VAR, "https://env.example.com/")];
        let config = ClientOptions::new().resolve_from(&env).unwrap();
        assert_eq!(config.endpoint(), "https://env.example.com");
    }

    #[test]
    fn fields_resolve_independently() {
        let env = [(API_KEY_VAR, "env-key")];
        let config = ClientOptions::new()
            .with_endpoint("https://opt.example.com")
            .resolve_from(&env)
            .unwrap();
        assert_eq!(config.api_key(), "env-key");
        assert_eq!(config.endpoint(), "https://opt.example.com");
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ClientOptions::new()
            .with_api_key("k")
            .with_endpoint("https://x.com///")
            .resolve_from(&NO_ENV)
            .unwrap();
        assert_eq!(config.endpoint(), "https://x.com");
    }

    #[test]
    fn empty_explicit_key_is_missing() {
        let env = [(API_KEY_VAR, "env-key")];
        let result = ClientOptions::new().with_api_key("").resolve_from(&env);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn empty_env_key_is_missing() {
        let env = [(API_KEY_VAR, "")];
        let result = ClientOptions::new().resolve_from(&env);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn empty_env_endpoint_falls_back_to_default() {
        let env = [(API_KEY_VAR, "k"), (ENDPOINT_VAR, "")];
        let config = ClientOptions::new().resolve_from(&env).unwrap();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn empty_explicit_endpoint_is_kept() {
        let env = [(ENDPOINT_VAR, "https://env.example.com")];
        let config = ClientOptions::new()
            .with_api_key("k")
            .with_endpoint("")
            .resolve_from(&env)
            .unwrap();
        assert_eq!(config.endpoint(), "");
    }

    #[test]
    fn numeric_key_stays_a_string() {
        let env = [(API_KEY_VAR, "007")];
        let config = ClientOptions::new().resolve_from(&env).unwrap();
        assert_eq!(config.api_key(), "007");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ResolvedConfig::new("https://x.com", "super-secret").unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("https://x.com"));
    }

    #[test]
    fn resolved_config_new_normalizes_and_validates() {
        let config = ResolvedConfig::new("https://x.com/", "k").unwrap();
        assert_eq!(config.endpoint(), "https://x.com");
        assert!(matches!(
            ResolvedConfig::new("https://x.com", ""),
            Err(ConfigError::MissingApiKey)
        ));
    }
}
