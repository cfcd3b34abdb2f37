//! Checkout route handler.
//!
//! Validates the order payload and dispatches one confirmation email.
//! Orders are never persisted; the email is the whole side effect.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use naksu_core::Email;

use crate::error::{AppError, Result};
use crate::models::order::OrderDetails;
use crate::state::AppState;

/// Checkout request body.
///
/// Both fields are optional at the serde layer so that an absent field
/// produces the order-specific 400 message rather than a generic body
/// rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub order_details: Option<OrderDetails>,
}

/// Checkout confirmation response.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub message: &'static str,
}

/// Confirm an order by emailing its summary to the buyer.
///
/// # Errors
///
/// 400 if the email or items are missing, 500 if the relay rejects the
/// message or times out.
#[instrument(skip(state, req))]
pub async fn checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    let (email, order) = validate_checkout(req)?;

    state.mailer().send_order_confirmation(&email, &order).await?;

    tracing::info!(to = %email, items = order.items.len(), "Order confirmed");

    Ok(Json(CheckoutResponse {
        message: "Order confirmed. Confirmation email sent!",
    }))
}

/// Validate a checkout request before any dispatch happens.
fn validate_checkout(req: CheckoutRequest) -> Result<(Email, OrderDetails)> {
    let email_raw = req.email.unwrap_or_default();
    let Some(order) = req.order_details else {
        return Err(missing_data());
    };

    if email_raw.trim().is_empty() || order.items.is_empty() {
        return Err(missing_data());
    }

    let email = Email::parse(email_raw.trim())
        .map_err(|_| AppError::Validation("Invalid email address".to_string()))?;

    Ok((email, order))
}

fn missing_data() -> AppError {
    AppError::Validation("Missing order details or email".to_string())
}
