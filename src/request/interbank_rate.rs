//! Interbank transaction rate request builder

use crate::client::BankOfThailand;
use crate::dispatch::RequestSpec;
use crate::error::Result;
use crate::execute::Execute;
use crate::request::Request;
use crate::response::Response;

const BASE_URL: &str =
    "https://gateway.api.bot.or.th/Stat-InterbankTransactionRate/v2/INTRBNK_TXN_RATE";

/// Interbank transaction rate request builder
pub struct InterbankRate<'a, Client: Request> {
    client: &'a BankOfThailand<Client>,
    /// Start of the reporting period (`YYYY-MM-DD`)
    pub start_period: String,
    /// End of the reporting period (`YYYY-MM-DD`)
    pub end_period: String,
    /// Term filter (e.g. overnight, at call)
    pub term_type: Option<String>,
}

impl<'a, C: Request> InterbankRate<'a, C> {
    /// Create a new interbank rate request
    pub fn new(
        client: &'a BankOfThailand<C>,
        start_period: impl Into<String>,
        end_period: impl Into<String>,
    ) -> Self {
        Self {
            client,
            start_period: start_period.into(),
            end_period: end_period.into(),
            term_type: None,
        }
    }

    /// Restrict the series to a single term type
    pub fn term_type(mut self, term_type: impl Into<String>) -> Self {
        self.term_type = Some(term_type.into());
        self
    }

    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<Response>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request> Execute for InterbankRate<'a, C> {
    type Output = Response;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Response> {
        let spec = RequestSpec::get(format!("{BASE_URL}/"))
            .query("start_period", self.start_period)
            .query("end_period", self.end_period)
            .query_opt("term_type", self.term_type);

        let raw = self.client.execute(&spec).await?;
        Ok(Response::new(raw))
    }
}
