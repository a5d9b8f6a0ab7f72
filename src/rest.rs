//! REST API endpoints for the Bank of Thailand Statistics API
//!
//! Each function returns a request builder bound to a client. Call `.get()`
//! on the builder to execute the request.

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
