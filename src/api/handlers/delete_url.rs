//! Handler for deleting short aliases.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::auth::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (authentication required)
///
/// # Errors
///
/// Returns 404 when the alias is unknown; a delete affecting zero rows is
/// never reported as success.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    state.url_service.delete_url(&alias).await?;

    Ok(Json(StatusResponse::ok()))
}
