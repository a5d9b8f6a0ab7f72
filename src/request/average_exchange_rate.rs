//! Average exchange rate request builder
//!
//! Average THB rates against trading-partner currencies, published daily,
//! monthly, quarterly, and annually.

use crate::client::BankOfThailand;
use crate::dispatch::RequestSpec;
use crate::error::Result;
use crate::execute::Execute;
use crate::request::Request;
use crate::request::common::Frequency;
use crate::response::Response;

const BASE_URL: &str = "https://gateway.api.bot.or.th/Stat-ExchangeRate/v2";

/// Average exchange rate request builder
pub struct AverageExchangeRate<'a, Client: Request> {
    client: &'a BankOfThailand<Client>,
    /// Reporting frequency, which selects the series endpoint
    pub frequency: Frequency,
    /// Start of the reporting period
    pub start_period: String,
    /// End of the reporting period
    pub end_period: String,
    /// Three-letter currency code filter (e.g. `USD`, `EUR`)
    pub currency: Option<String>,
}

impl<'a, C: Request> AverageExchangeRate<'a, C> {
    /// Create a new average exchange rate request
    pub fn new(
        client: &'a BankOfThailand<C>,
        frequency: Frequency,
        start_period: impl Into<String>,
        end_period: impl Into<String>,
    ) -> Self {
        Self {
            client,
            frequency,
            start_period: start_period.into(),
            end_period: end_period.into(),
            currency: None,
        }
    }

    /// Restrict the series to a single currency
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<Response>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request> Execute for AverageExchangeRate<'a, C> {
    type Output = Response;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Response> {
        let series = match self.frequency {
            Frequency::Daily => "DAILY_AVG_EXG_RATE",
            Frequency::Monthly => "MONTHLY_AVG_EXG_RATE",
            Frequency::Quarterly => "QUARTERLY_AVG_EXG_RATE",
            Frequency::Annual => "ANNUAL_AVG_EXG_RATE",
        };

        let spec = RequestSpec::get(format!("{BASE_URL}/{series}/"))
            .query("start_period", self.start_period)
            .query("end_period", self.end_period)
            .query_opt("currency", self.currency);

        let raw = self.client.execute(&spec).await?;
        Ok(Response::new(raw))
    }
}
