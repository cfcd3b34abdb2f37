//! Review route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use naksu_core::PersonName;

use crate::db::ReviewRepository;
use crate::error::{AppError, Result};
use crate::models::review::{Review, ReviewSample};
use crate::state::AppState;

/// Number of reviews returned by the random listing.
const SAMPLE_SIZE: i64 = 4;

/// Review submission body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewRequest {
    pub first: String,
    pub last: String,
    pub review_text: String,
}

/// Response for a stored review.
#[derive(Debug, Serialize)]
pub struct SubmitReviewResponse {
    pub message: &'static str,
    pub review: Review,
}

/// Response for the random listing.
#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewSample>,
}

/// Store a new review.
///
/// # Errors
///
/// 400 if any field is missing or empty.
#[instrument(skip(state, req))]
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitReviewRequest>,
) -> Result<(StatusCode, Json<SubmitReviewResponse>)> {
    let (first, last, text) = validate_submission(&req)?;

    let review = ReviewRepository::new(state.pool())
        .create(&first, &last, &text)
        .await?;

    tracing::info!(review_id = review.id, "Review submitted successfully");

    Ok((
        StatusCode::CREATED,
        Json(SubmitReviewResponse {
            message: "Review submitted successfully",
            review,
        }),
    ))
}

/// Serve a random sample of reviews.
///
/// Each request draws independently; two consecutive calls may overlap or
/// differ entirely.
///
/// # Errors
///
/// 404 when no reviews are stored yet.
#[instrument(skip(state))]
pub async fn list_random(State(state): State<AppState>) -> Result<Json<ReviewsResponse>> {
    let reviews = ReviewRepository::new(state.pool())
        .sample(SAMPLE_SIZE)
        .await?;

    if reviews.is_empty() {
        return Err(AppError::NotFound("No reviews found".to_string()));
    }

    Ok(Json(ReviewsResponse { reviews }))
}

/// Validate a submission, producing parsed names and trimmed text.
fn validate_submission(req: &SubmitReviewRequest) -> Result<(PersonName, PersonName, String)> {
    let text = req.review_text.trim();
    if text.is_empty() {
        return Err(missing_fields());
    }

    let first = PersonName::parse(&req.first).map_err(|_| missing_fields())?;
    let last = PersonName::parse(&req.last).map_err(|_| missing_fields())?;

    Ok((first, last, text.to_string()))
}

fn missing_fields() -> AppError {
    AppError::Validation("Please provide all required fields".to_string())
}
