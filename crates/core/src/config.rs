//! API configuration passed explicitly to the HTTP client.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::constants::{API_BASE_URL_ENV, API_TIMEOUT_ENV, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_MS};
use crate::errors::{Error, Result};

/// Connection settings for the GTD backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Config for `base_url` with the default timeout and JSON headers.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            headers,
        }
    }

    /// Resolve the config from the process environment.
    ///
    /// `GTD_API_BASE_URL` selects the backend (falls back to the loopback
    /// default) and `GTD_API_TIMEOUT_MS` optionally overrides the timeout.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the config through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_BASE_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let mut config = Self::new(base_url);

        if let Some(raw) = lookup(API_TIMEOUT_ENV) {
            let millis = raw.trim().parse::<u64>().map_err(|_| {
                Error::InvalidConfigValue(format!("{}={}", API_TIMEOUT_ENV, raw))
            })?;
            if millis == 0 {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must be greater than zero",
                    API_TIMEOUT_ENV
                )));
            }
            config.timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Join the base URL and an endpoint, trimming one redundant slash on
    /// each side of the join point.
    pub fn api_url(&self, endpoint: &str) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        let endpoint = endpoint.strip_prefix('/').unwrap_or(endpoint);
        format!("{}/{}", base, endpoint)
    }
}
