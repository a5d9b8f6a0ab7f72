//! Deposit interest rate request builders
//!
//! Deposit rates posted by commercial banks, either per bank or averaged
//! across the market.

use crate::client::BankOfThailand;
use crate::dispatch::RequestSpec;
use crate::error::Result;
use crate::execute::Execute;
use crate::request::Request;
use crate::response::Response;

const BASE_URL: &str = "https://gateway.api.bot.or.th/DepositRate/v2";

enum Series {
    Posted,
    Average,
}

/// Deposit interest rate request builder
pub struct DepositRate<'a, Client: Request> {
    client: &'a BankOfThailand<Client>,
    series: Series,
    /// Start of the reporting period (`YYYY-MM-DD`)
    pub start_period: String,
    /// End of the reporting period (`YYYY-MM-DD`)
    pub end_period: String,
}

impl<'a, C: Request> DepositRate<'a, C> {
    /// Deposit rates for individual commercial banks
    pub fn new(
        client: &'a BankOfThailand<C>,
        start_period: impl Into<String>,
        end_period: impl Into<String>,
    ) -> Self {
        Self {
            client,
            series: Series::Posted,
            start_period: start_period.into(),
            end_period: end_period.into(),
        }
    }

    /// Average deposit rates across commercial banks
    pub fn average(
        client: &'a BankOfThailand<C>,
        start_period: impl Into<String>,
        end_period: impl Into<String>,
    ) -> Self {
        Self {
            client,
            series: Series::Average,
            start_period: start_period.into(),
            end_period: end_period.into(),
        }
    }

    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<Response>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request> Execute for DepositRate<'a, C> {
    type Output = Response;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Response> {
        let path = match self.series {
            Series::Posted => "deposit_rate",
            Series::Average => "avg_deposit_rate",
        };

        let spec = RequestSpec::get(format!("{BASE_URL}/{path}/"))
            .query("start_period", self.start_period)
            .query("end_period", self.end_period);

        let raw = self.client.execute(&spec).await?;
        Ok(Response::new(raw))
    }
}
