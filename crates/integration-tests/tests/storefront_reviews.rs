//! Integration tests for review submission and random listing.
//!
//! Run with: cargo test -p naksu-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the storefront API (configurable via environment).
fn base_url() -> String {
    std::env::var("NAKSU_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

async fn submit_review(client: &Client, first: &str, last: &str, text: &str) -> reqwest::Response {
    client
        .post(format!("{}/submit-review", base_url()))
        .json(&json!({"first": first, "last": last, "reviewText": text}))
        .send()
        .await
        .expect("submit-review request failed")
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_submit_review_returns_stored_record() {
    let client = Client::new();

    let resp = submit_review(&client, "Maya", "Chen", "Lovely blend, arrived fast.").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("response not JSON");
    assert_eq!(body["message"], "Review submitted successfully");
    assert_eq!(body["review"]["first"], "Maya");
    assert_eq!(body["review"]["reviewText"], "Lovely blend, arrived fast.");
    // The store assigns the timestamp
    assert!(body["review"]["createdAt"].is_string());
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_submit_review_with_missing_field_is_rejected() {
    let client = Client::new();

    let resp = submit_review(&client, "Maya", "Chen", "").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("response not JSON");
    assert_eq!(body["message"], "Please provide all required fields");
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_review_listing_returns_at_most_four() {
    let client = Client::new();

    // Guarantee at least one review exists
    let resp = submit_review(&client, "Sam", "Okafor", "Five stars.").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .get(format!("{}/reviews", base_url()))
        .send()
        .await
        .expect("reviews request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("response not JSON");
    let reviews = body["reviews"].as_array().expect("reviews not an array");

    assert!(!reviews.is_empty());
    assert!(reviews.len() <= 4);

    // Only the first name and text are projected
    for review in reviews {
        let obj = review.as_object().expect("review not an object");
        assert!(obj.contains_key("first"));
        assert!(obj.contains_key("reviewText"));
        assert!(!obj.contains_key("last"));
        assert!(!obj.contains_key("createdAt"));
    }
}
