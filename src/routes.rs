//! Top-level router composition.
//!
//! # Route Structure
//!
//! - `POST /auth/signup`   - Account registration (public)
//! - `POST /auth/signin`   - Sign in, issue session (public)
//! - `GET  /auth/refresh`  - Rotate refresh token (refresh cookie)
//! - `POST /url`           - Create alias (access token + id cookie)
//! - `DELETE /url/{alias}` - Delete alias (access token + id cookie)
//! - `GET  /{alias}`       - Redirect (public)
//! - `GET  /health`        - Health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Access-token gate on URL management routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    health_handler, redirect_handler, refresh_handler, signin_handler, signup_handler,
};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/signin", post(signin_handler))
        .route("/auth/refresh", get(refresh_handler))
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
