//! Cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use restutils_core::constants::{DEFAULT_CACHE_CAPACITY, ENV_CACHE_CAPACITY, ENV_CACHE_EXPIRY_MS};
use restutils_core::error::{RestUtilsError, Result};

/// Cache configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Expiry in milliseconds; `None` keeps entries until removed
    pub expiry_ms: Option<u64>,
    /// Number of entries to preallocate
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            expiry_ms: None,
            initial_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Creates a config whose entries expire after `expiry`.
    ///
    /// Sub-millisecond precision is truncated.
    pub fn with_expiry(expiry: Duration) -> Self {
        Self {
            expiry_ms: Some(u64::try_from(expiry.as_millis()).unwrap_or(u64::MAX)),
            ..Self::default()
        }
    }

    /// Sets the number of entries to preallocate.
    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Returns the configured expiry, if any.
    pub fn expiry(&self) -> Option<Duration> {
        self.expiry_ms.map(Duration::from_millis)
    }

    /// Loads the config from `RESTUTILS_CACHE_EXPIRY_MS` and
    /// `RESTUTILS_CACHE_CAPACITY`.
    ///
    /// Unset or blank variables fall back to the defaults.
    ///
    /// # Errors
    /// Returns [`RestUtilsError::InvalidEnvVar`] if a variable is set but is
    /// not a non-negative integer.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = parse_var::<u64, _>(&lookup, ENV_CACHE_EXPIRY_MS)? {
            config.expiry_ms = Some(ms);
        }
        if let Some(capacity) = parse_var::<usize, _>(&lookup, ENV_CACHE_CAPACITY)? {
            config.initial_capacity = capacity;
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, var: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| RestUtilsError::InvalidEnvVar {
            var: var.to_string(),
            value: raw.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_never_expires() {
        let config = CacheConfig::default();
        assert_eq!(config.expiry(), None);
        assert_eq!(config.initial_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_with_expiry() {
        let config = CacheConfig::with_expiry(Duration::from_millis(1500)).with_capacity(64);
        assert_eq!(config.expiry_ms, Some(1500));
        assert_eq!(config.expiry(), Some(Duration::from_millis(1500)));
        assert_eq!(config.initial_capacity, 64);
    }

    #[test]
    fn test_from_lookup_empty_env() {
        let config = CacheConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = CacheConfig::from_lookup(lookup_from(&[
            (ENV_CACHE_EXPIRY_MS, " 250 "),
            (ENV_CACHE_CAPACITY, "128"),
        ]))
        .unwrap();
        assert_eq!(config.expiry(), Some(Duration::from_millis(250)));
        assert_eq!(config.initial_capacity, 128);
    }

    #[test]
    fn test_from_lookup_blank_is_unset() {
        let config = CacheConfig::from_lookup(lookup_from(&[(ENV_CACHE_EXPIRY_MS, "   ")])).unwrap();
        assert_eq!(config.expiry(), None);
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = CacheConfig::from_lookup(lookup_from(&[(ENV_CACHE_EXPIRY_MS, "5m")])).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains(ENV_CACHE_EXPIRY_MS));

        let err = CacheConfig::from_lookup(lookup_from(&[(ENV_CACHE_CAPACITY, "-1")])).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CacheConfig = serde_json::from_str(r#"{"expiry_ms": 100}"#).unwrap();
        assert_eq!(config.expiry(), Some(Duration::from_millis(100)));
        assert_eq!(config.initial_capacity, DEFAULT_CACHE_CAPACITY);

        let config: CacheConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CacheConfig::default());
    }
}
