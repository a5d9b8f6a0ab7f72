//! License check request builders
//!
//! Lookups for licenses and registrations of businesses under BOT
//! supervision, such as P-Loan, Nano Finance, and e-Money providers.

use crate::client::BankOfThailand;
use crate::dispatch::RequestSpec;
use crate::error::Result;
use crate::execute::Execute;
use crate::request::Request;
use crate::response::Response;

const BASE_URL: &str = "https://gateway.api.bot.or.th/BotLicenseCheckAPI";

/// Authorized entity search request builder
pub struct SearchAuthorized<'a, Client: Request> {
    client: &'a BankOfThailand<Client>,
    /// Search keyword
    pub keyword: String,
    /// Page position
    pub page: Option<u32>,
    /// Number of results per page
    pub limit: Option<u32>,
}

impl<'a, C: Request> SearchAuthorized<'a, C> {
    /// Create a new authorized entity search request
    pub fn new(client: &'a BankOfThailand<C>, keyword: impl Into<String>) -> Self {
        Self {
            client,
            keyword: keyword.into(),
            page: None,
            limit: None,
        }
    }

    /// Set the page position
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the number of results per page
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<Response>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request> Execute for SearchAuthorized<'a, C> {
    type Output = Response;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Response> {
        let spec = RequestSpec::get(format!("{BASE_URL}/SearchAuthorized"))
            .query("keyword", self.keyword)
            .query_opt("page", self.page.map(|page| page.to_string()))
            .query_opt("limit", self.limit.map(|limit| limit.to_string()));

        let raw = self.client.execute(&spec).await?;
        Ok(Response::new(raw))
    }
}

/// License detail request builder
pub struct LicenseDetail<'a, Client: Request> {
    client: &'a BankOfThailand<Client>,
    /// ID of the authorized entity in the system
    pub auth_id: String,
    /// Document reference number
    pub doc_id: String,
}

impl<'a, C: Request> LicenseDetail<'a, C> {
    /// Create a new license detail request
    pub fn new(
        client: &'a BankOfThailand<C>,
        auth_id: impl Into<String>,
        doc_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            auth_id: auth_id.into(),
            doc_id: doc_id.into(),
        }
    }

    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<Response>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request> Execute for LicenseDetail<'a, C> {
    type Output = Response;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Response> {
        let spec = RequestSpec::get(format!("{BASE_URL}/License"))
            .query("authId", self.auth_id)
            .query("docId", self.doc_id);

        let raw = self.client.execute(&spec).await?;
        Ok(Response::new(raw))
    }
}

/// Authorized entity detail request builder
pub struct AuthorizedDetail<'a, Client: Request> {
    client: &'a BankOfThailand<Client>,
    /// ID of the authorized entity in the system
    pub id: u64,
}

impl<'a, C: Request> AuthorizedDetail<'a, C> {
    /// Create a new authorized entity detail request
    pub fn new(client: &'a BankOfThailand<C>, id: u64) -> Self {
        Self { client, id }
    }

    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<Response>> + 'a {
        Execute::get(self)
    }
}

impl<'a, C: Request> Execute for AuthorizedDetail<'a, C> {
    type Output = Response;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<Response> {
        let spec =
            RequestSpec::get(format!("{BASE_URL}/AuthorizedDetail")).query("id", self.id.to_string());

        let raw = self.client.execute(&spec).await?;
        Ok(Response::new(raw))
    }
}
