//! Deposit interest rate endpoints

use crate::client::BankOfThailand;
use crate::request::Request;
use crate::request::deposit_rate::DepositRate;

/// Get deposit rates for individual commercial banks
pub fn rates<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> DepositRate<'a, Client> {
    DepositRate::new(client, start_period, end_period)
}

/// Get average deposit rates across commercial banks
pub fn average_rates<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> DepositRate<'a, Client> {
    DepositRate::average(client, start_period, end_period)
}
