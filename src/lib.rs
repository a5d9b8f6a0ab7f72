//! Rust client library for the Bank of Thailand Statistics API
//!
//! # Quick Start
//!
//! ```no_run
//! use botstat::BankOfThailand;
//! use botstat::rest::exchange_rate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BankOfThailand::default().with_token("your_api_token");
//!     let response = exchange_rate::daily(&client, "2025-01-01", "2025-01-31")
//!         .get()
//!         .await?;
//!     println!("{} observations", response.count());
//!     Ok(())
//! }
//! ```
//!
//! # Endpoint API
//!
//! Each endpoint returns a request builder. Call `.get()` to execute; the
//! result is a [`Response`] that wraps the decoded payload and exposes
//! time-series analytics:
//!
//! ```no_run
//! use botstat::BankOfThailand;
//! use botstat::rest::{average_exchange_rate, financial_holidays};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BankOfThailand::default().with_token("your_api_token");
//!
//! // Average THB/EUR rates with summary statistics
//! let rates = average_exchange_rate::monthly(&client, "2025-01", "2025-06")
//!     .currency("EUR")
//!     .get()
//!     .await?;
//! println!("mean rate: {:.4}", rates.average("rate"));
//! println!("trend: {:?}", rates.trend("rate"));
//!
//! // Holiday calendars come back as a flat list
//! let holidays = financial_holidays::list(&client, "2025").get().await?;
//! println!("{}", holidays.to_csv()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`hyper`** (default) - Uses [`hyper`](https://docs.rs/hyper) as the HTTP client (lightweight and fast).
//!
//! - **`reqwest`** - Alternative HTTP client using [`reqwest`](https://docs.rs/reqwest) (more features).
//!   To use reqwest instead: `default-features = false, features = ["reqwest"]`.
//!
//! - **`dotenvy`** - Enables loading the API token from environment variables via [`dotenvy`](https://docs.rs/dotenvy).
//!   Adds `BankOfThailand::new()` which loads `BOT_API_TOKEN` from `.env` or the environment.
//!   Without this feature, use `BankOfThailand::default().with_token("your_token")` instead.
//!
//! - **`table`** - Enables Polars DataFrame output via [`polars`](https://docs.rs/polars).

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod execute;
pub mod request;
pub mod response;
pub mod rest;

pub use config::Config;
pub use dispatch::RequestSpec;
pub use error::{Error, Result};
pub use response::{Change, DailyChange, Response, Trend};

/// The main Bank of Thailand API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::BankOfThailand<YourClient>` directly
#[cfg(feature = "reqwest")]
pub type BankOfThailand = client::BankOfThailand<reqwest::Client>;

/// The main Bank of Thailand API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::BankOfThailand<YourClient>` directly
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
pub type BankOfThailand = client::BankOfThailand<request::HyperClient>;

// When neither reqwest nor hyper is enabled, re-export the generic client
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
pub use client::BankOfThailand;
