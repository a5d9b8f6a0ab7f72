//! Swap point endpoints

use crate::client::BankOfThailand;
use crate::request::Request;
use crate::request::swap_point::SwapPoint;

/// Get USD/THB swap points
///
/// Use [`term_type`](SwapPoint::term_type) on the returned builder to
/// restrict the series to a single tenor.
pub fn rates<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> SwapPoint<'a, Client> {
    SwapPoint::new(client, start_period, end_period)
}
