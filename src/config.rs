//! Client configuration
//!
//! Configuration is an explicit value owned by the client and passed by
//! reference into the dispatcher. There is no process-wide default instance.

use std::time::Duration;

use crate::error::{Error, Result};

/// Default base URL for the BOT API gateway.
pub const DEFAULT_BASE_URL: &str = "https://gateway.api.bot.or.th";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of retry attempts. Reserved: the dispatcher currently
/// performs a single attempt per call.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for the Bank of Thailand API client.
#[derive(Debug, Clone)]
pub struct Config {
    /// API token sent in the `Authorization` header.
    pub api_token: Option<String>,
    /// Base URL prepended to relative endpoint paths.
    pub base_url: String,
    /// Connection and total timeout applied to each request.
    pub timeout: Duration,
    /// Retry budget for failed requests. Reserved for future use; no core
    /// component consumes it.
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl Config {
    /// Create a configuration with default values and no token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API token.
    pub fn with_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    /// Set the base URL used for relative endpoint paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the reserved retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the token is missing or empty,
    /// or when the base URL is empty.
    pub fn validate(&self) -> Result<()> {
        match &self.api_token {
            Some(token) if !token.is_empty() => {}
            _ => return Err(Error::Configuration("API token is required".to_string())),
        }
        if self.base_url.is_empty() {
            return Err(Error::Configuration("base URL cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Check whether the configuration is valid.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub(crate) fn token(&self) -> Result<&str> {
        match self.api_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(Error::Configuration("API token is required".to_string())),
        }
    }
}
