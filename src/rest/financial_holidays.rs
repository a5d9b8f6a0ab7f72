//! Financial institutions' holidays endpoints

use crate::client::BankOfThailand;
use crate::request::Request;
use crate::request::financial_holidays::FinancialHolidays;

/// Get financial institutions' holidays for a year
///
/// # Example
/// ```no_run
/// # use botstat::BankOfThailand;
/// # async fn example() {
/// # let client = BankOfThailand::default().with_token("api-token");
/// let holidays = botstat::rest::financial_holidays::list(&client, "2025")
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn list<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    year: impl Into<String>,
) -> FinancialHolidays<'a, Client> {
    FinancialHolidays::new(client, year)
}
