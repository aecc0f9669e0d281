//! Client configuration.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{Result, error::Error};

/// Where the game service listens unless told otherwise
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// What the controller does when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Reset the service's game so client and service agree on an empty
    /// board. Discards whatever game the service had in progress.
    #[default]
    Reset,
    /// Leave the service alone and start from a blank grid.
    Keep,
}

/// Configuration for connecting to the game service.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use boardsync::app::{ClientConfig, LoadPolicy};
///
/// let config = ClientConfig::new("http://localhost:8080/")
///     .with_request_timeout(Duration::from_secs(5))
///     .with_load_policy(LoadPolicy::Keep);
///
/// assert_eq!(config.base_url(), "http://localhost:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the service; `/move` and `/reset` hang off it
    pub base_url: String,
    /// Per-request timeout in milliseconds; none means wait indefinitely
    pub request_timeout_ms: Option<u64>,
    /// Startup behaviour
    pub load_policy: LoadPolicy,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_ms: None,
            load_policy: LoadPolicy::default(),
        }
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {path:?}"),
            source,
        })?;
        let config: ClientConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout, rounded up to whole milliseconds.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.request_timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a base URL that is not
    /// http(s) or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url();
        let has_host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(Error::InvalidConfiguration {
                message: format!("base URL '{}' must be an http(s) URL", self.base_url),
            });
        }
        if self.request_timeout_ms == Some(0) {
            return Err(Error::InvalidConfiguration {
                message: "request timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
