//! Client configuration.
//!
//! A `ClientConfig` is fixed once built; `with_*` methods return a new
//! value.

use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ApiError;

/// Versioned API root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.usagym.org/v4";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the API.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: username.into(),
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// - `USAGYM_USERNAME`, `USAGYM_PASSWORD`: required credentials
    /// - `USAGYM_BASE_URL`: overrides [`DEFAULT_BASE_URL`]
    /// - `USAGYM_TIMEOUT`: request timeout in seconds
    pub fn from_env() -> Result<Self, ApiError> {
        let username = std::env::var("USAGYM_USERNAME")
            .map_err(|_| ApiError::Config("USAGYM_USERNAME is not set".to_string()))?;
        let password = std::env::var("USAGYM_PASSWORD")
            .map_err(|_| ApiError::Config("USAGYM_PASSWORD is not set".to_string()))?;

        let mut config = Self::new(username, password);
        if let Ok(url) = std::env::var("USAGYM_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(timeout) = std::env::var("USAGYM_TIMEOUT") {
            let secs: u64 = timeout
                .trim()
                .parse()
                .map_err(|_| ApiError::Config(format!("invalid timeout value: {timeout}")))?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ApiError::Config("username and password are required".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(ApiError::Config("timeout must be greater than zero".to_string()));
        }
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::Config(format!("invalid base URL: {}", self.base_url)));
        }
        Ok(())
    }

    /// `Authorization` header value for HTTP Basic authentication.
    pub fn auth_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

// Keeps the password out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
