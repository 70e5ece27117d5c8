//! Runtime configuration, read once from the environment at startup.

use anyhow::{Context, Result};
use std::time::Duration;

use crate::constants::{
    DEFAULT_TIMEOUT_SECS, ENV_API_BASE, ENV_API_KEY, ENV_TIMEOUT_SECS, OPENWEATHER_API_BASE,
    PLACEHOLDER_API_KEYS,
};

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the OpenWeatherMap `data/2.5` API, without trailing slash
    pub api_base: String,
    /// `None` puts every tool in demo mode
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: OPENWEATHER_API_BASE.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Loads configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.api_key = lookup(ENV_API_KEY)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && !PLACEHOLDER_API_KEYS.contains(&key.as_str()));

        if let Some(base) = lookup(ENV_API_BASE).filter(|b| !b.trim().is_empty()) {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().with_context(|| {
                format!(
                    "{} must be a whole number of seconds, got {:?}",
                    ENV_TIMEOUT_SECS, raw
                )
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Points the client at `api_base` with the given key
    pub fn with_api(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn is_demo(&self) -> bool {
        self.api_key.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn missing_key_means_demo() {
        let config = load(&[]).unwrap();
        assert!(config.is_demo());
        assert_eq!(config.api_base, OPENWEATHER_API_BASE);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn placeholder_and_blank_keys_mean_demo() {
        for key in ["YOUR_API_KEY_HERE", "your_key", "   ", ""] {
            let config = load(&[(ENV_API_KEY, key)]).unwrap();
            assert!(config.is_demo(), "{:?} should be treated as missing", key);
        }
    }

    #[test]
    fn reads_key_base_and_timeout() {
        let config = load(&[
            (ENV_API_KEY, " abc123 "),
            (ENV_API_BASE, "http://localhost:9000/data/2.5/"),
            (ENV_TIMEOUT_SECS, "5"),
        ])
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.api_base, "http://localhost:9000/data/2.5");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = load(&[(ENV_TIMEOUT_SECS, "soon")]).unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));
    }
}
