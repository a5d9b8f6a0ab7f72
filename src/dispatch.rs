//! Request dispatch and outcome classification
//!
//! The dispatcher turns a [`RequestSpec`] plus a [`Config`] into a decoded
//! JSON value or a classified [`Error`]. It makes exactly one attempt per
//! call; the `max_retries` configuration field is reserved and not consumed
//! here.

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::request::{HttpRequest, HttpResponse, Method, Request};

/// Parameters for a single API call, immutable per dispatch.
///
/// The URL may be absolute (each BOT API lives under its own path prefix on
/// the gateway) or a base-relative path beginning with `/`.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// HTTP method
    pub method: Method,
    /// Absolute URL or base-relative path
    pub url: String,
    /// Query parameters, attached only when non-empty
    pub query: Vec<(String, String)>,
    /// JSON body, POST only
    pub body: Option<Value>,
}

impl RequestSpec {
    /// A GET request for the given URL or path.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// A POST request for the given URL or path with a JSON body.
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a query parameter when the value is present.
    pub fn query_opt(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.query.push((key.into(), value));
        }
        self
    }
}

/// Dispatch one request and classify the outcome.
///
/// Validates the configuration before touching the network, resolves the
/// target URL, attaches the authorization and content-type headers, applies
/// the configured timeout, and decodes a 2xx body as JSON. Every non-2xx
/// status maps onto exactly one [`Error`] kind.
///
/// # Errors
///
/// [`Error::Configuration`] for a missing token or base URL, the
/// status-classified variants for completed exchanges, and
/// [`Error::Request`] for network failures or malformed JSON.
pub async fn execute<C: Request>(http: &C, config: &Config, spec: &RequestSpec) -> Result<Value> {
    config.validate()?;

    let url = resolve_url(&config.base_url, &spec.url, &spec.query)?;
    let body = spec.body.as_ref().map(Value::to_string);

    let request = HttpRequest {
        method: spec.method,
        url: url.clone(),
        headers: vec![
            ("Authorization".to_string(), config.token()?.to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ],
        body,
        timeout: config.timeout,
    };

    debug!("{} {url}", spec.method);
    let response = http.execute(request).await?;
    classify(response, &url)
}

fn resolve_url(base_url: &str, path: &str, query: &[(String, String)]) -> Result<String> {
    let mut url = if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{base_url}{path}")
    };

    if !query.is_empty() {
        let encoded = serde_urlencoded::to_string(query)
            .map_err(|e| Error::Custom(format!("failed to encode query parameters: {e}")))?;
        url.push('?');
        url.push_str(&encoded);
    }

    Ok(url)
}

fn classify(response: HttpResponse, url: &str) -> Result<Value> {
    match response.status {
        200..=299 => parse_json(&response.body),
        status => {
            warn!("request to {url} failed with status {status}");
            match status {
                401 => Err(Error::Authentication {
                    message: "authentication failed, check your API token".to_string(),
                    status,
                }),
                403 => Err(Error::Authentication {
                    message: "access forbidden, your token may not have permission for this resource"
                        .to_string(),
                    status,
                }),
                404 => Err(Error::NotFound {
                    url: url.to_string(),
                }),
                429 => Err(Error::RateLimited {
                    retry_after: response.retry_after,
                }),
                500..=599 => Err(Error::Server { status }),
                _ => Err(Error::Request(format!(
                    "unexpected response status: {status}"
                ))),
            }
        }
    }
}

fn parse_json(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(body).map_err(|e| Error::Request(format!("invalid JSON response: {e}")))
}
