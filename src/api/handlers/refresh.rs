//! Handler for refresh-token rotation.

use axum::{extract::State, http::HeaderMap, response::Response};
use serde_json::json;

use crate::api::session::{REFRESH_COOKIE, cookie_value, session_response};
use crate::error::AppError;
use crate::state::AppState;

/// Rotates the refresh token and reissues an access token.
///
/// # Endpoint
///
/// `GET /auth/refresh` (refresh-token cookie required)
///
/// # Response
///
/// On success: 200 with a new `{"jwt": ...}`, a new `Authorization` header,
/// and the rotated refresh cookie. The stored refresh row keeps its
/// identity; only its value changes.
///
/// # Errors
///
/// Returns 403 when the cookie is missing or the token is invalid,
/// expired, or bound to a different user.
pub async fn refresh_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let presented = cookie_value(&headers, REFRESH_COOKIE)
        .ok_or_else(|| AppError::forbidden("authorization failed", json!({})))?;

    let (user, tokens) = state.session_service.refresh_session(&presented).await?;

    session_response(user.id, &tokens)
}
