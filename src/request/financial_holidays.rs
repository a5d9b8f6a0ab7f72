//! Financial institutions' holidays request builder
//!
//! The holiday calendar comes back as a flat list rather than the usual
//! `result.data` envelope.

use crate::client::BankOfThailand;
use crate::dispatch::RequestSpec;
use crate::error::Result;
use crate::execute::Execute;
use crate::request::Request;
use crate::response::Response;

const BASE_URL: &str = "https://gateway.api.bot.or.th/financial-institutions-holidays";

/// Financial institutions' holidays request builder
pub struct FinancialHolidays<'a, Client: Request> {
    client: &'a BankOfThailand<Client>,
    /// Calendar year (`YYYY`)
    pub year: String,
}

impl<'a, C: Request> FinancialHolidays<'a, C> {
    /// Create a new holidays request
    pub fn new(client: &'a BankOfThailand<C>, year: impl Into<String>) -> Self {
        Self {
            client,
            year: year.into(),
        }
    }

    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<Response>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request> Execute for FinancialHolidays<'a, C> {
    type Output = Response;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Response> {
        let spec = RequestSpec::get(format!("{BASE_URL}/")).query("year", self.year);

        let raw = self.client.execute(&spec).await?;
        Ok(Response::new(raw))
    }
}
