//! Environment lookup seam.
//!
//! Resolution never reads `std::env` directly; it goes through an
//! [`EnvSource`] so tests and embedders can supply their own variables.

use std::collections::{BTreeMap, HashMap};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "SPEKTRUM_API_KEY";

/// Environment variable holding the API endpoint.
pub const ENDPOINT_VAR: &str = "SPEKTRUM_ENDPOINT";

/// A source of environment-style variables.
pub trait EnvSource {
    /// Look up `key`. Unset and empty values both return `None`.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}

impl<S: std::hash::BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty()).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty()).cloned()
    }
}

impl EnvSource for [(&str, &str)] {
    fn var(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_string())
            .filter(|value| !value.is_empty())
    }
}

impl<const N: usize> EnvSource for [(&str, &str); N] {
    fn var(&self, key: &str) -> Option<String> {
        self.as_slice().var(key)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_source_finds_values() {
        let env = [(API_KEY_VAR, "k1"), (ENDPOINT_VAR, "https://x.com")];
        assert_eq!(env.var(API_KEY_VAR).as_deref(), Some("k1"));
        assert_eq!(env.var(ENDPOINT_VAR).as_deref(), Some("https://x.com"));
        assert!(env.var("SPEKTRUM_OTHER").is_none());
    }

    #[test]
    fn empty_values_read_as_unset() {
        let env = [(API_KEY_VAR, "")];
        assert!(env.var(API_KEY_VAR).is_none());

        let mut map = HashMap::new();
        map.insert(API_KEY_VAR.to_string(), String::new());
        assert!(map.var(API_KEY_VAR).is_none());
    }
}
