//! Government debt securities endpoints

use crate::client::BankOfThailand;
use crate::request::Request;
use crate::request::debt_securities::BondAuction;

/// Get government bond auction results
pub fn auction_results<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> BondAuction<'a, Client> {
    BondAuction::new(client, start_period, end_period)
}
