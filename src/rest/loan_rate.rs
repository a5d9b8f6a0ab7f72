//! Loan interest rate endpoints

use crate::client::BankOfThailand;
use crate::request::Request;
use crate::request::loan_rate::LoanRate;

/// Get loan rates for individual commercial banks
pub fn rates<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> LoanRate<'a, Client> {
    LoanRate::new(client, start_period, end_period)
}

/// Get average loan rates across commercial banks
pub fn average_rates<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> LoanRate<'a, Client> {
    LoanRate::average(client, start_period, end_period)
}
