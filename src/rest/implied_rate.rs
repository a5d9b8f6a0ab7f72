//! Thai Baht implied interest rate endpoints

use crate::client::BankOfThailand;
use crate::request::Request;
use crate::request::implied_rate::ImpliedRate;

/// Get Thai Baht implied interest rates
///
/// Use [`rate_type`](ImpliedRate::rate_type) on the returned builder to
/// restrict the series to a single rate type.
pub fn rates<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> ImpliedRate<'a, Client> {
    ImpliedRate::new(client, start_period, end_period)
}
