//! Session cookie handling and token response assembly.
//!
//! Sign-in and refresh answer with the same shape: the access token in the
//! JSON body and `Authorization` header, the user id and refresh token in
//! HttpOnly cookies. The id cookie is a tamper-evidence cross-check, not a
//! trust anchor; the access token's signature stays the authority.

use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use cookie::{Cookie, SameSite};
use serde_json::json;

use crate::api::dto::auth::TokenResponse;
use crate::application::services::SessionTokens;
use crate::error::AppError;

/// Name of the identity cookie carrying the plaintext user id.
pub const ID_COOKIE: &str = "id";

/// Name of the HttpOnly cookie carrying the refresh token.
pub const REFRESH_COOKIE: &str = "refresh-token";

/// Extracts a named cookie value from the request headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';')
        .filter_map(|part| Cookie::parse(part.trim()).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

/// Builds the 200 response for sign-in and refresh.
///
/// Sets the `Authorization` header and both session cookies alongside the
/// JSON body.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if a header value cannot be encoded.
pub fn session_response(user_id: i64, tokens: &SessionTokens) -> Result<Response, AppError> {
    let bearer = HeaderValue::from_str(&format!("Bearer {}", tokens.access_token))
        .map_err(|_| header_error())?;
    let id_cookie = HeaderValue::from_str(&build_cookie(ID_COOKIE, &user_id.to_string()))
        .map_err(|_| header_error())?;
    let refresh_cookie = HeaderValue::from_str(&build_cookie(REFRESH_COOKIE, &tokens.refresh_token))
        .map_err(|_| header_error())?;

    let mut res = (
        StatusCode::OK,
        Json(TokenResponse {
            jwt: tokens.access_token.clone(),
        }),
    )
        .into_response();

    let headers = res.headers_mut();
    headers.insert(header::AUTHORIZATION, bearer);
    headers.append(header::SET_COOKIE, id_cookie);
    headers.append(header::SET_COOKIE, refresh_cookie);

    Ok(res)
}

fn build_cookie(name: &str, value: &str) -> String {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
        .to_string()
}

fn header_error() -> AppError {
    AppError::internal("Failed to build session response", json!({}))
}
