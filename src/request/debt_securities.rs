//! Government debt securities auction result request builder

use crate::client::BankOfThailand;
use crate::dispatch::RequestSpec;
use crate::error::Result;
use crate::execute::Execute;
use crate::request::Request;
use crate::response::Response;

const BASE_URL: &str = "https://gateway.api.bot.or.th/BondAuction/bond_auction_v2";

/// Bond auction result request builder
pub struct BondAuction<'a, Client: Request> {
    client: &'a BankOfThailand<Client>,
    /// Start of the reporting period (`YYYY-MM-DD`)
    pub start_period: String,
    /// End of the reporting period (`YYYY-MM-DD`)
    pub end_period: String,
}

impl<'a, C: Request> BondAuction<'a, C> {
    /// Create a new bond auction request
    pub fn new(
        client: &'a BankOfThailand<C>,
        start_period: impl Into<String>,
        end_period: impl Into<String>,
    ) -> Self {
        Self {
            client,
            start_period: start_period.into(),
            end_period: end_period.into(),
        }
    }

    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<Response>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request> Execute for BondAuction<'a, C> {
    type Output = Response;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Response> {
        let spec = RequestSpec::get(format!("{BASE_URL}/"))
            .query("start_period", self.start_period)
            .query("end_period", self.end_period);

        let raw = self.client.execute(&spec).await?;
        Ok(Response::new(raw))
    }
}
