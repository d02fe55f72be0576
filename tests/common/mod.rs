#![allow(dead_code)]

use axum::routing::{get, post};
use axum::{Router, middleware};
use axum_test::{TestResponse, TestServer};
use chrono::Duration;
use sqlx::PgPool;
use url_shortener_api::api::handlers::{
    health_handler, redirect_handler, refresh_handler, signin_handler, signup_handler,
};
use url_shortener_api::api::middleware::auth;
use url_shortener_api::api::routes::protected_routes;
use url_shortener_api::application::services::TokenConfig;
use url_shortener_api::state::AppState;

pub const TEST_ACCESS_SECRET: &str = "test-access-secret";
pub const TEST_REFRESH_SECRET: &str = "test-refresh-secret";

/// Minimum bcrypt cost keeps the DB-backed tests fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_token_config() -> TokenConfig {
    TokenConfig {
        access_secret: TEST_ACCESS_SECRET.to_string(),
        refresh_secret: TEST_REFRESH_SECRET.to_string(),
        access_ttl: Duration::minutes(15),
        refresh_ttl: Duration::days(30),
    }
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::build(pool, test_token_config(), TEST_BCRYPT_COST)
}

/// Full application router without the path-normalization wrapper, which the
/// test transport does not need.
pub fn test_app(state: AppState) -> Router {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/signin", post(signin_handler))
        .route("/auth/refresh", get(refresh_handler))
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(protected)
        .with_state(state)
}

pub fn test_server(pool: PgPool) -> TestServer {
    TestServer::new(test_app(create_test_state(pool))).unwrap()
}

/// Extracts a cookie value from the Set-Cookie headers of a response.
pub fn extract_cookie(response: &TestResponse, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(axum::http::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|s| cookie::Cookie::parse(s.to_string()).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

/// Signed-in session credentials as a client would hold them.
pub struct TestSession {
    pub jwt: String,
    pub user_id: String,
    pub refresh_token: String,
}

/// Registers an account and signs in, returning the session credentials.
pub async fn signup_and_signin(server: &TestServer, email: &str, password: &str) -> TestSession {
    let signup = server
        .post("/auth/signup")
        .json(&serde_json::json!({
            "email": email,
            "password1": password,
            "password2": password,
        }))
        .await;
    signup.assert_status_ok();

    let signin = server
        .post("/auth/signin")
        .json(&serde_json::json!({
            "email": email,
            "password": password,
        }))
        .await;
    signin.assert_status_ok();

    let jwt = signin.json::<serde_json::Value>()["jwt"]
        .as_str()
        .expect("signin response carries a jwt")
        .to_string();

    TestSession {
        jwt,
        user_id: extract_cookie(&signin, "id").expect("id cookie set"),
        refresh_token: extract_cookie(&signin, "refresh-token").expect("refresh cookie set"),
    }
}

/// Counts refresh-token rows for a user.
pub async fn count_refresh_rows(pool: &PgPool, user_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM refresh_tokens WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
