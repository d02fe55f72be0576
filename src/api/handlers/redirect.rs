//! Handler for short alias redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its destination URL.
///
/// # Endpoint
///
/// `GET /{alias}` (public)
///
/// # Errors
///
/// Returns 404 when the alias is unknown.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state.url_service.get_url(&alias).await?;

    tracing::debug!(alias = %alias, "redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, mapping.destination_url)],
    )
        .into_response())
}
