//! Statistics series search request builder

use crate::client::BankOfThailand;
use crate::dispatch::RequestSpec;
use crate::error::Result;
use crate::execute::Execute;
use crate::request::Request;
use crate::response::Response;

const BASE_URL: &str = "https://gateway.api.bot.or.th/search-series";

/// Series keyword search request builder
///
/// Searches BOT statistics by series code, series name, or relevant terms.
/// The API returns up to 100 series per search.
pub struct SearchSeries<'a, Client: Request> {
    client: &'a BankOfThailand<Client>,
    /// Search keyword
    pub keyword: String,
}

impl<'a, C: Request> SearchSeries<'a, C> {
    /// Create a new series search request
    pub fn new(client: &'a BankOfThailand<C>, keyword: impl Into<String>) -> Self {
        Self {
            client,
            keyword: keyword.into(),
        }
    }

    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<Response>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request> Execute for SearchSeries<'a, C> {
    type Output = Response;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Response> {
        let spec = RequestSpec::get(format!("{BASE_URL}/")).query("keyword", self.keyword);

        let raw = self.client.execute(&spec).await?;
        Ok(Response::new(raw))
    }
}
