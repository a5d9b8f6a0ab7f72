//! Thai Baht implied interest rate request builder

use crate::client::BankOfThailand;
use crate::dispatch::RequestSpec;
use crate::error::Result;
use crate::execute::Execute;
use crate::request::Request;
use crate::response::Response;

const BASE_URL: &str =
    "https://gateway.api.bot.or.th/Stat-ThaiBahtImpliedInterestRate/v2/THB_IMPL_INT_RATE";

/// Thai Baht implied interest rate request builder
pub struct ImpliedRate<'a, Client: Request> {
    client: &'a BankOfThailand<Client>,
    /// Start of the reporting period (`YYYY-MM-DD`)
    pub start_period: String,
    /// End of the reporting period (`YYYY-MM-DD`)
    pub end_period: String,
    /// Rate type filter
    pub rate_type: Option<String>,
}

impl<'a, C: Request> ImpliedRate<'a, C> {
    /// Create a new implied rate request
    pub fn new(
        client: &'a BankOfThailand<C>,
        start_period: impl Into<String>,
        end_period: impl Into<String>,
    ) -> Self {
        Self {
            client,
            start_period: start_period.into(),
            end_period: end_period.into(),
            rate_type: None,
        }
    }

    /// Restrict the series to a single rate type
    pub fn rate_type(mut self, rate_type: impl Into<String>) -> Self {
        self.rate_type = Some(rate_type.into());
        self
    }

    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<Response>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request> Execute for ImpliedRate<'a, C> {
    type Output = Response;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Response> {
        let spec = RequestSpec::get(format!("{BASE_URL}/"))
            .query("start_period", self.start_period)
            .query("end_period", self.end_period)
            .query_opt("rate_type", self.rate_type);

        let raw = self.client.execute(&spec).await?;
        Ok(Response::new(raw))
    }
}
