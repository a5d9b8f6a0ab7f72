//! Error types for the Bank of Thailand API client

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failures surfaced by the client, classified by kind.
///
/// HTTP exchanges map onto exactly one variant: 401/403 become
/// [`Authentication`](Error::Authentication), 404 becomes
/// [`NotFound`](Error::NotFound), 429 becomes
/// [`RateLimited`](Error::RateLimited), 5xx becomes
/// [`Server`](Error::Server), and everything else that is not a 2xx becomes
/// [`Request`](Error::Request). Network-level failures and malformed JSON in
/// an otherwise successful response are also [`Request`](Error::Request).
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration is missing or invalid. Raised before any network
    /// call is made.
    #[error("{0}")]
    Configuration(String),

    /// The API rejected the caller's token (HTTP 401 or 403).
    #[error("{message}")]
    Authentication {
        /// Human-readable reason
        message: String,
        /// Originating HTTP status code
        status: u16,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("resource not found: {url}")]
    NotFound {
        /// The fully resolved request URL
        url: String,
    },

    /// The request quota was exceeded (HTTP 429).
    #[error("rate limit exceeded")]
    RateLimited {
        /// Seconds to wait before retrying, parsed from the `Retry-After`
        /// response header when present
        retry_after: Option<u64>,
    },

    /// The API returned a 5xx status.
    #[error("server error ({status})")]
    Server {
        /// Originating HTTP status code
        status: u16,
    },

    /// Network-level failure, malformed response body, or a status code not
    /// covered by any other variant.
    #[error("{0}")]
    Request(String),

    /// A failure outside the HTTP exchange, such as DataFrame conversion or
    /// query-string encoding.
    #[error("{0}")]
    Custom(String),

    /// I/O failure while writing an export file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV serialization failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// The HTTP status code this error was classified from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. } | Error::Server { status } => Some(*status),
            Error::NotFound { .. } => Some(404),
            Error::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// Seconds to wait before retrying, for rate-limited responses.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Error::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}
