//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api            - Connectivity smoke endpoint (sample payload)
//! GET  /health         - Liveness probe
//! GET  /health/ready   - Readiness probe (checks the database)
//!
//! # Auth
//! POST /signup         - Create an account
//! POST /login          - Verify credentials
//!
//! # Reviews
//! POST /submit-review  - Store a customer review
//! GET  /reviews        - Random sample of up to 4 reviews
//!
//! # Checkout
//! POST /api/checkout   - Email an order confirmation
//! ```
//!
//! Every request body is deserialized into a typed struct before any
//! handler logic runs; every response body is JSON.

pub mod auth;
pub mod checkout;
pub mod reviews;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// Assemble the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(api_index))
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/submit-review", post(reviews::submit))
        .route("/reviews", get(reviews::list_random))
        .route("/api/checkout", post(checkout::checkout))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Sample payload for the connectivity smoke endpoint.
#[derive(Debug, Serialize)]
struct FruitsResponse {
    fruits: Vec<&'static str>,
}

/// Connectivity smoke endpoint.
async fn api_index() -> Json<FruitsResponse> {
    Json(FruitsResponse {
        fruits: vec!["apple", "orange", "banana"],
    })
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fruits_payload_shape() {
        let json = serde_json::to_value(FruitsResponse {
            fruits: vec!["apple", "orange", "banana"],
        })
        .unwrap();

        assert_eq!(json["fruits"], serde_json::json!(["apple", "orange", "banana"]));
    }
}
