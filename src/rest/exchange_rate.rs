//! Weighted-average interbank exchange rate endpoints

use crate::client::BankOfThailand;
use crate::request::Request;
use crate::request::common::Frequency;
use crate::request::exchange_rate::ReferenceRate;

/// Get daily weighted-average interbank exchange rates
///
/// Periods are `YYYY-MM-DD` dates.
///
/// # Example
/// ```no_run
/// # use botstat::BankOfThailand;
/// # async fn example() {
/// # let client = BankOfThailand::default().with_token("api-token");
/// let response = botstat::rest::exchange_rate::daily(&client, "2025-01-01", "2025-01-31")
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn daily<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> ReferenceRate<'a, Client> {
    ReferenceRate::new(client, Frequency::Daily, start_period, end_period)
}

/// Get monthly weighted-average interbank exchange rates
///
/// Periods are `YYYY-MM` months.
pub fn monthly<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> ReferenceRate<'a, Client> {
    ReferenceRate::new(client, Frequency::Monthly, start_period, end_period)
}

/// Get quarterly weighted-average interbank exchange rates
///
/// Periods are `YYYY-QN` quarters.
pub fn quarterly<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> ReferenceRate<'a, Client> {
    ReferenceRate::new(client, Frequency::Quarterly, start_period, end_period)
}

/// Get annual weighted-average interbank exchange rates
///
/// Periods are `YYYY` years.
pub fn annual<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> ReferenceRate<'a, Client> {
    ReferenceRate::new(client, Frequency::Annual, start_period, end_period)
}
