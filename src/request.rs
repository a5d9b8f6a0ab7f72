//! HTTP transport trait, resolved request/response types, and endpoint
//! request builders

use std::future::Future;
use std::time::Duration;

use crate::error::Result;

pub mod common;

pub mod average_exchange_rate;
pub mod debt_securities;
pub mod deposit_rate;
pub mod exchange_rate;
pub mod financial_holidays;
pub mod implied_rate;
pub mod interbank_rate;
pub mod license_check;
pub mod loan_rate;
pub mod search_series;
pub mod swap_point;

/// HTTP method supported by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A fully resolved HTTP request, ready for the transport.
///
/// The dispatcher produces this from a
/// [`RequestSpec`](crate::dispatch::RequestSpec) and the client
/// [`Config`](crate::config::Config): the URL carries the encoded query
/// string, the headers already include authorization and content type, and
/// the body is serialized JSON text.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the query string
    pub url: String,
    /// Header name/value pairs
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, if any
    pub body: Option<String>,
    /// Connection and total timeout for the exchange
    pub timeout: Duration,
}

/// A completed HTTP exchange as seen by the dispatcher.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body text
    pub body: String,
    /// Seconds parsed from the `Retry-After` header, when present
    pub retry_after: Option<u64>,
}

/// Trait for HTTP clients that can carry requests to the BOT API gateway.
///
/// Implement this trait to plug a custom HTTP client into
/// [`BankOfThailand`](crate::client::BankOfThailand). Implementations only
/// transport the request; outcome classification happens in the dispatcher.
pub trait Request: Send + Sync {
    /// Create a new instance of the HTTP client
    fn new() -> Self
    where
        Self: Sized;

    /// Perform the exchange and return the raw response
    fn execute(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send;
}

#[cfg(any(feature = "reqwest", feature = "hyper"))]
fn parse_retry_after(value: Option<&str>) -> Option<u64> {
    value.and_then(|s| s.trim().parse().ok())
}

#[cfg(feature = "reqwest")]
impl Request for reqwest::Client {
    fn new() -> Self {
        reqwest::Client::new()
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            Method::Get => self.get(&request.url),
            Method::Post => self.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.timeout(request.timeout).send().await.map_err(|e| {
            if e.is_timeout() {
                crate::error::Error::Request(format!("request timeout: {e}"))
            } else if e.is_connect() {
                crate::error::Error::Request(format!("connection failed: {e}"))
            } else {
                crate::error::Error::Request(format!("request failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let retry_after =
            parse_retry_after(response.headers().get("Retry-After").and_then(|h| h.to_str().ok()));
        let body = response
            .text()
            .await
            .map_err(|e| crate::error::Error::Request(format!("failed to read response body: {e}")))?;

        Ok(HttpResponse {
            status,
            body,
            retry_after,
        })
    }
}

#[cfg(feature = "hyper")]
/// Hyper client wrapper
#[derive(Clone)]
pub struct HyperClient {
    client: std::sync::Arc<
        hyper_util::client::legacy::Client<
            hyper_tls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>,
            http_body_util::Full<hyper::body::Bytes>,
        >,
    >,
}

#[cfg(feature = "hyper")]
impl Request for HyperClient {
    fn new() -> Self {
        let https = hyper_tls::HttpsConnector::new();
        let client = hyper_util::client::legacy::Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);
        Self {
            client: std::sync::Arc::new(client),
        }
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        use http_body_util::BodyExt;

        let uri: hyper::Uri = request
            .url
            .parse()
            .map_err(|e| crate::error::Error::Custom(format!("invalid URL: {e}")))?;

        let method = match request.method {
            Method::Get => hyper::Method::GET,
            Method::Post => hyper::Method::POST,
        };

        let mut builder = hyper::Request::builder().method(method).uri(uri);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = http_body_util::Full::new(hyper::body::Bytes::from(request.body.unwrap_or_default()));
        let req = builder
            .body(body)
            .map_err(|e| crate::error::Error::Custom(format!("failed to build request: {e}")))?;

        let response = match tokio::time::timeout(request.timeout, self.client.request(req)).await {
            Ok(result) => {
                result.map_err(|e| crate::error::Error::Request(format!("request failed: {e}")))?
            }
            Err(_) => {
                return Err(crate::error::Error::Request(format!(
                    "request timeout after {}s",
                    request.timeout.as_secs()
                )));
            }
        };

        let status = response.status().as_u16();
        let retry_after =
            parse_retry_after(response.headers().get("retry-after").and_then(|h| h.to_str().ok()));

        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| crate::error::Error::Request(format!("failed to read response body: {e}")))?
            .to_bytes();

        let body = String::from_utf8(body_bytes.to_vec())
            .map_err(|e| crate::error::Error::Request(format!("invalid UTF-8 in response: {e}")))?;

        Ok(HttpResponse {
            status,
            body,
            retry_after,
        })
    }
}
