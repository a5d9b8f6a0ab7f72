//! Average exchange rate endpoints

use crate::client::BankOfThailand;
use crate::request::Request;
use crate::request::average_exchange_rate::AverageExchangeRate;
use crate::request::common::Frequency;

/// Get daily average exchange rates
///
/// # Example
/// ```no_run
/// # use botstat::BankOfThailand;
/// # async fn example() {
/// # let client = BankOfThailand::default().with_token("api-token");
/// let response = botstat::rest::average_exchange_rate::daily(&client, "2025-01-01", "2025-01-31")
///     .currency("USD")
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn daily<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> AverageExchangeRate<'a, Client> {
    AverageExchangeRate::new(client, Frequency::Daily, start_period, end_period)
}

/// Get monthly average exchange rates
pub fn monthly<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> AverageExchangeRate<'a, Client> {
    AverageExchangeRate::new(client, Frequency::Monthly, start_period, end_period)
}

/// Get quarterly average exchange rates
pub fn quarterly<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> AverageExchangeRate<'a, Client> {
    AverageExchangeRate::new(client, Frequency::Quarterly, start_period, end_period)
}

/// Get annual average exchange rates
pub fn annual<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    start_period: impl Into<String>,
    end_period: impl Into<String>,
) -> AverageExchangeRate<'a, Client> {
    AverageExchangeRate::new(client, Frequency::Annual, start_period, end_period)
}
