//! License check endpoints

use crate::client::BankOfThailand;
use crate::request::Request;
use crate::request::license_check::{AuthorizedDetail, LicenseDetail, SearchAuthorized};

/// Search for authorized entities by keyword
///
/// Use [`page`](SearchAuthorized::page) and
/// [`limit`](SearchAuthorized::limit) on the returned builder for
/// pagination.
pub fn search_authorized<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    keyword: impl Into<String>,
) -> SearchAuthorized<'a, Client> {
    SearchAuthorized::new(client, keyword)
}

/// Get license details for an authorized entity
pub fn license<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    auth_id: impl Into<String>,
    doc_id: impl Into<String>,
) -> LicenseDetail<'a, Client> {
    LicenseDetail::new(client, auth_id, doc_id)
}

/// Get details for an authorized entity
pub fn authorized_detail<'a, Client: Request>(
    client: &'a BankOfThailand<Client>,
    id: u64,
) -> AuthorizedDetail<'a, Client> {
    AuthorizedDetail::new(client, id)
}
