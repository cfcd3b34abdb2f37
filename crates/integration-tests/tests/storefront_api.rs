//! Integration tests for the smoke and health endpoints.
//!
//! Run with: cargo test -p naksu-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the storefront API (configurable via environment).
fn base_url() -> String {
    std::env::var("NAKSU_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_api_smoke_endpoint_serves_fruits() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/api", base_url()))
        .send()
        .await
        .expect("api request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("response not JSON");
    assert_eq!(body["fruits"], json!(["apple", "orange", "banana"]));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_health_endpoints() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("health request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("health body"), "ok");

    let resp = client
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("readiness request failed");
    assert_eq!(resp.status(), StatusCode::OK);
}
