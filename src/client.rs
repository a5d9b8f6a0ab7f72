//! Main Bank of Thailand API client

use serde_json::Value;

use crate::config::Config;
use crate::dispatch::{self, RequestSpec};
use crate::error::Result;
use crate::request::Request;

/// The main Bank of Thailand API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
///
/// The client owns its [`Config`]; there is no process-wide configuration.
#[cfg(feature = "reqwest")]
#[derive(Debug, Clone)]
pub struct BankOfThailand<Client: Request = reqwest::Client> {
    client: Client,
    config: Config,
}

/// The main Bank of Thailand API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
///
/// The client owns its [`Config`]; there is no process-wide configuration.
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
#[derive(Debug, Clone)]
pub struct BankOfThailand<Client: Request = crate::request::HyperClient> {
    client: Client,
    config: Config,
}

/// The main Bank of Thailand API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
///
/// The client owns its [`Config`]; there is no process-wide configuration.
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
#[derive(Debug, Clone)]
pub struct BankOfThailand<Client: Request> {
    client: Client,
    config: Config,
}

// Implementation for any Client that implements Request
impl<Client: Request> BankOfThailand<Client> {
    /// Create a new client using the default HTTP client.
    ///
    /// This method is only available when the `dotenvy` feature is enabled.
    /// It loads the API token from the `BOT_API_TOKEN` environment variable
    /// using dotenvy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) when
    /// the token is missing.
    #[cfg(feature = "dotenvy")]
    pub fn new() -> crate::Result<Self> {
        dotenvy::dotenv().ok(); // Try to load .env file, ignore errors

        let api_token = std::env::var("BOT_API_TOKEN").map_err(|_| {
            crate::Error::Configuration("BOT_API_TOKEN environment variable is not set".to_string())
        })?;

        Ok(Self {
            client: Client::new(),
            config: Config::default().with_token(api_token),
        })
    }

    #[cfg(not(feature = "dotenvy"))]
    /// Create a new client with the default HTTP client and a default
    /// configuration.
    ///
    /// You must set the API token using [`with_token`](Self::with_token) or
    /// [`with_config`](Self::with_config) before making requests.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            config: Config::default(),
        }
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the API token for this instance.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use botstat::BankOfThailand;
    ///
    /// let client = BankOfThailand::default().with_token("my_api_token");
    /// ```
    pub fn with_token(mut self, api_token: impl Into<String>) -> Self {
        self.config.api_token = Some(api_token.into());
        self
    }

    /// Replace the whole configuration for this instance.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Get the configuration for this instance.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Dispatch one request and return the decoded JSON payload.
    ///
    /// This is the contract endpoint resources use: a method, a URL or
    /// base-relative path, query parameters, and an optional body.
    ///
    /// # Errors
    ///
    /// See [`dispatch::execute`].
    pub async fn execute(&self, spec: &RequestSpec) -> Result<Value> {
        dispatch::execute(&self.client, &self.config, spec).await
    }
}

// Default implementation for reqwest
#[cfg(feature = "reqwest")]
impl Default for BankOfThailand<reqwest::Client> {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Config::default(),
        }
    }
}

// Default implementation for hyper
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
impl Default for BankOfThailand<crate::request::HyperClient> {
    fn default() -> Self {
        Self {
            client: crate::request::HyperClient::new(),
            config: Config::default(),
        }
    }
}

// Default implementation when no HTTP client feature is enabled
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
impl<Client: Request> Default for BankOfThailand<Client> {
    /// Create a default client with no API token set.
    ///
    /// You must call [`with_token`](Self::with_token) before making requests.
    fn default() -> Self {
        Self {
            client: Client::new(),
            config: Config::default(),
        }
    }
}
