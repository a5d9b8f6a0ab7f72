//! Interbank transaction rate endpoints

use crate::client::BankOfThailand;
use crate::request::Request;
use crate::request::interbank_rate::InterbankRate;

/// Get interbank transaction rates
///
/// Use [`term_type`](InterbankRate::term_type) on the returned builder to
/// restrict the series to a single term.
pub fn rates<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> InterbankRate<'a, Client> {
    InterbankRate::new(client, start_period, end_period)
}
