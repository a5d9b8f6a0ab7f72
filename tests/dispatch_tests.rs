//! Tests for request dispatch and outcome classification
//!
//! A mock transport stands in for the HTTP backend so the dispatcher's URL
//! resolution, header attachment, and status classification can be observed
//! without touching the network.

use std::sync::Mutex;
use std::time::Duration;

use botstat::client::BankOfThailand;
use botstat::config::Config;
use botstat::dispatch::RequestSpec;
use botstat::request::{HttpRequest, HttpResponse, Method, Request};
use botstat::rest;
use botstat::{Error, Result};
use serde_json::json;

/// Canned-response transport that records every request it carries.
struct MockTransport {
    status: u16,
    body: String,
    retry_after: Option<u64>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    fn with_status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            retry_after: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn ok(body: &str) -> Self {
        Self::with_status(200, body)
    }

    fn retry_after(mut self, seconds: u64) -> Self {
        self.retry_after = Some(seconds);
        self
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Request for MockTransport {
    fn new() -> Self {
        Self::ok("{}")
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.seen.lock().unwrap().push(request);
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
            retry_after: self.retry_after,
        })
    }
}

fn client(transport: MockTransport) -> BankOfThailand<MockTransport> {
    BankOfThailand::new()
        .with_client(transport)
        .with_token("test_token_123")
}

#[tokio::test]
async fn success_decodes_json_body() {
    let bot = client(MockTransport::ok(r#"{"result": {"data": [1, 2, 3]}}"#));
    let value = bot.execute(&RequestSpec::get("/series")).await.unwrap();
    assert_eq!(value, json!({"result": {"data": [1, 2, 3]}}));
}

#[tokio::test]
async fn empty_success_body_decodes_to_empty_object() {
    let bot = client(MockTransport::ok(""));
    let value = bot.execute(&RequestSpec::get("/series")).await.unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn malformed_json_is_a_request_failure() {
    let bot = client(MockTransport::ok("{not json"));
    let error = bot.execute(&RequestSpec::get("/series")).await.unwrap_err();
    match error {
        Error::Request(message) => assert!(message.contains("invalid JSON")),
        other => panic!("expected Request error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_is_an_authentication_failure() {
    let bot = client(MockTransport::with_status(401, ""));
    let error = bot.execute(&RequestSpec::get("/series")).await.unwrap_err();
    assert_eq!(error.status(), Some(401));
    match error {
        Error::Authentication { message, status } => {
            assert_eq!(status, 401);
            assert!(message.contains("API token"));
        }
        other => panic!("expected Authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn forbidden_is_an_authentication_failure() {
    let bot = client(MockTransport::with_status(403, ""));
    let error = bot.execute(&RequestSpec::get("/series")).await.unwrap_err();
    match error {
        Error::Authentication { message, status } => {
            assert_eq!(status, 403);
            assert!(message.contains("forbidden"));
        }
        other => panic!("expected Authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_carries_the_resolved_url() {
    let bot = client(MockTransport::with_status(404, ""));
    let error = bot.execute(&RequestSpec::get("/missing")).await.unwrap_err();
    assert_eq!(error.status(), Some(404));
    match error {
        Error::NotFound { url } => {
            assert_eq!(url, "https://gateway.api.bot.or.th/missing");
        }
        other => panic!("expected NotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limited_carries_retry_after_seconds() {
    let bot = client(MockTransport::with_status(429, "").retry_after(60));
    let error = bot.execute(&RequestSpec::get("/series")).await.unwrap_err();
    assert_eq!(error.retry_after(), Some(60));

    let bot = client(MockTransport::with_status(429, ""));
    let error = bot.execute(&RequestSpec::get("/series")).await.unwrap_err();
    match error {
        Error::RateLimited { retry_after } => assert_eq!(retry_after, None),
        other => panic!("expected RateLimited error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_carry_the_status_code() {
    let bot = client(MockTransport::with_status(503, ""));
    let error = bot.execute(&RequestSpec::get("/series")).await.unwrap_err();
    match &error {
        Error::Server { status } => assert_eq!(*status, 503),
        other => panic!("expected Server error, got {other:?}"),
    }
    assert!(error.to_string().contains("503"));
}

#[tokio::test]
async fn unclassified_statuses_are_request_failures() {
    let bot = client(MockTransport::with_status(418, ""));
    let error = bot.execute(&RequestSpec::get("/series")).await.unwrap_err();
    match error {
        Error::Request(message) => assert!(message.contains("418")),
        other => panic!("expected Request error, got {other:?}"),
    }
}

#[tokio::test]
async fn relative_paths_resolve_against_the_base_url() {
    let bot = client(MockTransport::ok("{}"));
    let spec = RequestSpec::get("/test/path")
        .query("start_period", "2025-01-01")
        .query("end_period", "2025-01-31");
    bot.execute(&spec).await.unwrap();

    let requests = bot.client().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url,
        "https://gateway.api.bot.or.th/test/path?start_period=2025-01-01&end_period=2025-01-31"
    );
}

#[tokio::test]
async fn absolute_urls_are_used_verbatim() {
    let bot = client(MockTransport::ok("{}"));
    let spec = RequestSpec::get("https://example.com/api/").query("year", "2025");
    bot.execute(&spec).await.unwrap();

    let requests = bot.client().requests();
    assert_eq!(requests[0].url, "https://example.com/api/?year=2025");
}

#[tokio::test]
async fn empty_query_adds_no_separator() {
    let bot = client(MockTransport::ok("{}"));
    bot.execute(&RequestSpec::get("/plain")).await.unwrap();

    let requests = bot.client().requests();
    assert_eq!(requests[0].url, "https://gateway.api.bot.or.th/plain");
}

#[tokio::test]
async fn attaches_authorization_and_content_type_headers() {
    let bot = client(MockTransport::ok("{}"));
    bot.execute(&RequestSpec::get("/series")).await.unwrap();

    let requests = bot.client().requests();
    let headers = &requests[0].headers;
    assert!(
        headers
            .iter()
            .any(|(name, value)| name == "Authorization" && value == "test_token_123")
    );
    assert!(
        headers
            .iter()
            .any(|(name, value)| name == "Content-Type" && value == "application/json")
    );
}

#[tokio::test]
async fn post_serializes_the_json_body() {
    let bot = client(MockTransport::ok("{}"));
    let spec = RequestSpec::post("/submit", json!({"keyword": "bond"}));
    bot.execute(&spec).await.unwrap();

    let requests = bot.client().requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].body.as_deref(), Some(r#"{"keyword":"bond"}"#));
}

#[tokio::test]
async fn get_requests_have_no_body() {
    let bot = client(MockTransport::ok("{}"));
    bot.execute(&RequestSpec::get("/series")).await.unwrap();

    let requests = bot.client().requests();
    assert_eq!(requests[0].method, Method::Get);
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn missing_token_fails_before_any_network_call() {
    let bot = BankOfThailand::<MockTransport>::new().with_client(MockTransport::ok("{}"));
    let error = bot.execute(&RequestSpec::get("/series")).await.unwrap_err();
    assert!(matches!(error, Error::Configuration(_)));
    assert!(bot.client().requests().is_empty());
}

#[tokio::test]
async fn empty_token_fails_before_any_network_call() {
    let bot = client(MockTransport::ok("{}")).with_token("");
    let error = bot.execute(&RequestSpec::get("/series")).await.unwrap_err();
    assert!(matches!(error, Error::Configuration(_)));
    assert!(bot.client().requests().is_empty());
}

#[tokio::test]
async fn empty_base_url_fails_validation() {
    let config = Config::new().with_token("test_token_123").with_base_url("");
    let bot = BankOfThailand::<MockTransport>::new()
        .with_client(MockTransport::ok("{}"))
        .with_config(config);
    let error = bot.execute(&RequestSpec::get("/series")).await.unwrap_err();
    assert!(matches!(error, Error::Configuration(_)));
}

#[tokio::test]
async fn a_failed_exchange_is_attempted_exactly_once() {
    let bot = client(MockTransport::with_status(500, ""));
    let _ = bot.execute(&RequestSpec::get("/series")).await;
    assert_eq!(bot.client().requests().len(), 1);
}

#[tokio::test]
async fn the_configured_timeout_reaches_the_transport() {
    let config = Config::new()
        .with_token("test_token_123")
        .with_timeout(Duration::from_secs(5));
    let bot = BankOfThailand::<MockTransport>::new()
        .with_client(MockTransport::ok("{}"))
        .with_config(config);
    bot.execute(&RequestSpec::get("/series")).await.unwrap();

    let requests = bot.client().requests();
    assert_eq!(requests[0].timeout, Duration::from_secs(5));
}

#[tokio::test]
async fn reference_rate_builder_routes_to_the_daily_series() {
    let bot = client(MockTransport::ok(r#"{"result": {"data": []}}"#));
    rest::exchange_rate::daily(&bot, "2025-01-01", "2025-01-31")
        .get()
        .await
        .unwrap();

    let requests = bot.client().requests();
    assert_eq!(
        requests[0].url,
        "https://gateway.api.bot.or.th/Stat-ReferenceRate/v2/DAILY_REF_RATE/?start_period=2025-01-01&end_period=2025-01-31"
    );
}

#[tokio::test]
async fn average_rate_builder_appends_the_currency_filter() {
    let bot = client(MockTransport::ok(r#"{"result": {"data": []}}"#));
    rest::average_exchange_rate::monthly(&bot, "2025-01", "2025-06")
        .currency("EUR")
        .get()
        .await
        .unwrap();

    let requests = bot.client().requests();
    assert_eq!(
        requests[0].url,
        "https://gateway.api.bot.or.th/Stat-ExchangeRate/v2/MONTHLY_AVG_EXG_RATE/?start_period=2025-01&end_period=2025-06&currency=EUR"
    );
}

#[tokio::test]
async fn deposit_rate_builders_select_their_series() {
    let bot = client(MockTransport::ok(r#"{"result": {"data": []}}"#));
    rest::deposit_rate::average_rates(&bot, "2025-01-01", "2025-01-31")
        .get()
        .await
        .unwrap();
    rest::deposit_rate::rates(&bot, "2025-01-01", "2025-01-31")
        .get()
        .await
        .unwrap();

    let requests = bot.client().requests();
    assert!(requests[0].url.contains("/DepositRate/v2/avg_deposit_rate/"));
    assert!(requests[1].url.contains("/DepositRate/v2/deposit_rate/"));
}

#[tokio::test]
async fn swap_point_builder_omits_absent_optional_parameters() {
    let bot = client(MockTransport::ok(r#"{"result": {"data": []}}"#));
    rest::swap_point::rates(&bot, "2025-01-01", "2025-01-31")
        .get()
        .await
        .unwrap();

    let requests = bot.client().requests();
    assert!(!requests[0].url.contains("term_type"));
}

#[tokio::test]
async fn holiday_builder_routes_by_year() {
    let bot = client(MockTransport::ok("[]"));
    rest::financial_holidays::list(&bot, "2025").get().await.unwrap();

    let requests = bot.client().requests();
    assert_eq!(
        requests[0].url,
        "https://gateway.api.bot.or.th/financial-institutions-holidays/?year=2025"
    );
}

#[tokio::test]
async fn license_search_builder_paginates() {
    let bot = client(MockTransport::ok("{}"));
    rest::license_check::search_authorized(&bot, "finance")
        .page(1)
        .limit(10)
        .get()
        .await
        .unwrap();

    let requests = bot.client().requests();
    assert_eq!(
        requests[0].url,
        "https://gateway.api.bot.or.th/BotLicenseCheckAPI/SearchAuthorized?keyword=finance&page=1&limit=10"
    );
}

#[tokio::test]
async fn builders_wrap_the_payload_in_a_response() {
    let bot = client(MockTransport::ok(
        r#"{"result": {"data": [{"period": "2025-01-01", "value": "33.5"}]}}"#,
    ));
    let response = rest::interbank_rate::rates(&bot, "2025-01-01", "2025-01-31")
        .get()
        .await
        .unwrap();
    assert_eq!(response.count(), 1);
    assert_eq!(response.values_for("value"), vec![33.5]);
}
