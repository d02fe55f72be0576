//! Handler for signing in and opening a session.

use axum::{Json, extract::State, response::Response};
use serde_json::json;
use validator::Validate;

use crate::api::dto::auth::SigninRequest;
use crate::api::session::session_response;
use crate::error::AppError;
use crate::state::AppState;

/// Verifies credentials and issues a fresh session.
///
/// # Endpoint
///
/// `POST /auth/signin`
///
/// # Response
///
/// On success: 200 with `{"jwt": ...}`, the access token mirrored in the
/// `Authorization` header, and the `id` and `refresh-token` cookies set.
/// Any previously stored refresh token for the user is replaced.
///
/// # Errors
///
/// Returns 400 for unknown email or wrong password, without revealing
/// which of the two failed.
pub async fn signin_handler(
    State(state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let user = state
        .account_service
        .verify_credentials(&payload.email, &payload.password)
        .await
        .map_err(|e| match e {
            AppError::Unauthorized { .. } => {
                AppError::bad_request("Invalid email or password", json!({}))
            }
            other => other,
        })?;

    let tokens = state.session_service.issue_session(&user).await?;

    session_response(user.id, &tokens)
}
