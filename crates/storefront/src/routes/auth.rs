//! Signup and login route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::user::User;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Signup request body.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub first: String,
    pub last: String,
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for successful signup and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub user: User,
}

/// Create a new account.
///
/// The password is hashed before storage and the response user record
/// carries no credential material.
///
/// # Errors
///
/// 400 if a field is missing/empty or the email is already registered.
#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    ensure_present(&[
        req.first.as_str(),
        req.last.as_str(),
        req.email.as_str(),
        req.password.as_str(),
    ])?;

    let user = AuthService::new(state.pool())
        .signup(&req.first, &req.last, &req.email, &req.password)
        .await?;

    tracing::info!(user_id = user.id, "Signup successful");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully",
            user,
        }),
    ))
}

/// Verify credentials.
///
/// # Errors
///
/// 400 with one fixed message for a missing user or a wrong password.
#[instrument(skip(state, req), fields(email = %req.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    ensure_present(&[req.email.as_str(), req.password.as_str()])?;

    let user = AuthService::new(state.pool())
        .login(&req.email, &req.password)
        .await?;

    tracing::info!(user_id = user.id, "Login successful");

    Ok(Json(AuthResponse {
        message: "Login successful",
        user,
    }))
}

/// Reject the request unless every required field has content.
fn ensure_present(fields: &[&str]) -> Result<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(AppError::Validation(
            "Please fill in all fields".to_string(),
        ));
    }
    Ok(())
}
