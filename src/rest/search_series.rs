//! Statistics series search endpoints

use crate::client::BankOfThailand;
use crate::request::Request;
use crate::request::search_series::SearchSeries;

/// Search statistics series by keyword
pub fn search<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    keyword: impl Into<String>,
) -> SearchSeries<'a, Client> {
    SearchSeries::new(client, keyword)
}
