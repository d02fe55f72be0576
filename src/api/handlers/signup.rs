//! Handler for account registration.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::auth::{SignupRequest, StatusResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::password_policy::validate_password;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /auth/signup`
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "password1": "...", "password2": "..." }
/// ```
///
/// # Errors
///
/// Returns 400 on malformed email, mismatched passwords, a password failing
/// the policy, or an already-registered email. No user row is created on
/// any failure.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    payload.validate()?;

    if payload.password1 != payload.password2 {
        return Err(AppError::bad_request(
            "Passwords do not match",
            json!({ "field": "password2" }),
        ));
    }

    validate_password(&payload.password1)?;

    state
        .account_service
        .register(&payload.email, &payload.password1)
        .await?;

    Ok(Json(StatusResponse::ok()))
}
