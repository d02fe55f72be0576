//! Request authentication gate for protected URL operations.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::api::session::{ID_COOKIE, cookie_value};
use crate::{error::AppError, state::AppState};

/// Validates the access token and its companion identity cookie.
///
/// # Contract
///
/// 1. Extract the bearer token from the `Authorization` header
/// 2. Verify its signature and expiry (no storage round-trip)
/// 3. Extract the `id` cookie and parse it as a user id
/// 4. Require the token's embedded id to equal the cookie id
///
/// Fails closed: a missing, malformed, or unverifiable credential — or a
/// mismatch between token and cookie — produces the same uniform 403
/// response. The raw token value is never logged or echoed.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::debug!("missing or malformed Authorization header");
            permission_denied()
        })?;

    let req = Request::from_parts(parts, body);

    let claims = st.session_service.verify_access(&token).map_err(|_| {
        tracing::debug!("access token failed verification");
        permission_denied()
    })?;

    let cookie_id: i64 = cookie_value(req.headers(), ID_COOKIE)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| {
            tracing::debug!("missing or invalid id cookie");
            permission_denied()
        })?;

    if claims.id != cookie_id {
        tracing::debug!(
            token_id = claims.id,
            cookie_id,
            "token and cookie ids do not match"
        );
        return Err(permission_denied());
    }

    Ok(next.run(req).await)
}

fn permission_denied() -> AppError {
    AppError::forbidden("authorization failed", json!({}))
}
