//! API configuration.
//!
//! Connection settings are constructed explicitly, either directly or from
//! the environment, and handed to [`crate::ApiClient`]. Nothing in this
//! crate reads process-wide state after startup.

use std::time::Duration;

use thiserror::Error;
use url::Url;

// ============================================================================
// Constants
// ============================================================================

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "API_KEY";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Config Error
// ============================================================================

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),

    /// The base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

// ============================================================================
// API Config
// ============================================================================

/// Connection settings for the outage API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL all request paths are appended to.
    pub base_url: Url,
    /// Key sent with every request in the `x-api-key` header.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Creates a config with the default timeout.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads the config from the `BASE_URL` and `API_KEY` environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if either variable is unset or
    /// empty, and [`ConfigError::InvalidBaseUrl`] if `BASE_URL` does not
    /// parse as an absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = read_var(BASE_URL_ENV)?;
        let api_key = read_var(API_KEY_ENV)?;
        Ok(Self::new(Url::parse(&base_url)?, api_key))
    }
}

fn read_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

// ============================================================================
// Tests
// ============================================================================
