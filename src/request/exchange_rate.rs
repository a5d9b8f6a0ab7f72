//! Weighted-average interbank exchange rate request builder
//!
//! Rates are calculated from daily interbank purchases and sales of US
//! Dollar against THB for transactions worth 1 million USD or more.

use crate::client::BankOfThailand;
use crate::dispatch::RequestSpec;
use crate::error::Result;
use crate::execute::Execute;
use crate::request::Request;
use crate::request::common::Frequency;
use crate::response::Response;

const BASE_URL: &str = "https://gateway.api.bot.or.th/Stat-ReferenceRate/v2";

/// Weighted-average interbank exchange rate (THB/USD) request builder
pub struct ReferenceRate<'a, Client: Request> {
    client: &'a BankOfThailand<Client>,
    /// Reporting frequency, which selects the series endpoint
    pub frequency: Frequency,
    /// Start of the reporting period (`YYYY-MM-DD`, `YYYY-MM`, `YYYY-QN`, or
    /// `YYYY` depending on frequency)
    pub start_period: String,
    /// End of the reporting period, same format as `start_period`
    pub end_period: String,
}

impl<'a, C: Request> ReferenceRate<'a, C> {
    /// Create a new reference rate request
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
        }
    }

    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<Response>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request> Execute for ReferenceRate<'a, C> {
    type Output = Response;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Response> {
        let series = match self.frequency {
            Frequency::Daily => "DAILY_REF_RATE",
            Frequency::Monthly => "MONTHLY_REF_RATE",
            Frequency::Quarterly => "QUARTERLY_REF_RATE",
            Frequency::Annual => "ANNUAL_REF_RATE",
        };

        let spec = RequestSpec::get(format!("{BASE_URL}/{series}/"))
            .query("start_period", self.start_period)
            .query("end_period", self.end_period);

        let raw = self.client.execute(&spec).await?;
        Ok(Response::new(raw))
    }
}
