//! Protected route configuration.
//!
//! Routes here sit behind the request authentication gate
//! ([`crate::api::middleware::auth`]).

use crate::api::handlers::{delete_url_handler, save_url_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// URL management routes, protected by the access-token gate.
///
/// # Endpoints
///
/// - `POST   /url`          - Create a short alias
/// - `DELETE /url/{alias}`  - Delete an alias
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_url_handler))
        .route("/url/{alias}", delete(delete_url_handler))
}
