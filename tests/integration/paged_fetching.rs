//! HTTP-level tests for the paginated resource operations.

use appannie_reporter::fetcher::ReviewApiClient;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn account_json(id: i64, name: &str, market: &str) -> serde_json::Value {
    json!({
        "account_id": id,
        "account_name": name,
        "publisher_name": "Acme Inc",
        "market": market,
        "vertical": "apps",
        "account_status": "active",
    })
}

#[tokio::test]
async fn accounts_follow_continuation_pointers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "accounts": [
                account_json(1, "First", "ios"),
                account_json(2, "Second", "ios"),
            ],
            "next_page": "/accounts-page-2",
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/accounts-page-2"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "accounts": [account_json(3, "Third", "android")],
        })))
        .mount(&server)
        .await;

    let client = ReviewApiClient::new(server.uri(), "test-token");
    let accounts = client.accounts().await;

    let names: Vec<&str> = accounts.iter().map(|a| a.account_name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn transport_failure_degrades_to_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = ReviewApiClient::new(server.uri(), "test-token");
    assert!(client.accounts().await.is_empty());
}

#[tokio::test]
async fn envelope_error_code_yields_no_entities() {
    let server = MockServer::start().await;

    // HTTP-level success, application-level failure inside the envelope.
    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 401,
            "error": "invalid token",
        })))
        .mount(&server)
        .await;

    let client = ReviewApiClient::new(server.uri(), "test-token");
    assert!(client.accounts().await.is_empty());
}

#[tokio::test]
async fn apps_are_fetched_from_the_account_products_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/101/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "products": [
                {"product_id": 9001, "product_name": "Anvil", "status": "live"},
                {
                    "product_id": 9002,
                    "product_name": "Rocket",
                    "devices": "iphone",
                    "status": "live",
                },
            ],
        })))
        .mount(&server)
        .await;

    let client = ReviewApiClient::new(server.uri(), "test-token");
    let apps = client.apps(101).await;

    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].product_name, "Anvil");
    assert_eq!(apps[0].devices, None);
    assert_eq!(apps[1].devices.as_deref(), Some("iphone"));
}

#[tokio::test]
async fn requests_are_counted_by_the_limiter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "accounts": [account_json(1, "Only", "ios")],
        })))
        .mount(&server)
        .await;

    let client = ReviewApiClient::new(server.uri(), "test-token");
    client.accounts().await;

    assert_eq!(client.limiter().minute_requests(), 1);
    assert_eq!(client.limiter().day_requests(), 1);
}
