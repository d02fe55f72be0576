//! Handler for creating short aliases.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::save_url::{SaveUrlRequest, SaveUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a destination URL under an alias.
///
/// # Endpoint
///
/// `POST /url` (authentication required)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "ex1" }
/// ```
///
/// The alias is optional; a random 6-character one is generated when absent.
///
/// # Errors
///
/// Returns 400 on an invalid URL or alias, and 400 when a caller-chosen
/// alias is already taken.
pub async fn save_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveUrlRequest>,
) -> Result<Json<SaveUrlResponse>, AppError> {
    payload.validate()?;

    let alias = state
        .url_service
        .save_url(&payload.url, payload.alias)
        .await?;

    Ok(Json(SaveUrlResponse {
        status: "ok",
        alias,
    }))
}
