mod common;

use axum::http::{HeaderValue, StatusCode, header};
use sqlx::PgPool;
use serde_json::json;

async fn count_users(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
async fn test_signup_success(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let response = server
        .post("/auth/signup")
        .json(&json!({
            "email": "user@example.com",
            "password1": "Str0ng!pass",
            "password2": "Str0ng!pass",
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
    assert_eq!(count_users(&pool).await, 1);
}

#[sqlx::test]
async fn test_signup_password_mismatch(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let response = server
        .post("/auth/signup")
        .json(&json!({
            "email": "user@example.com",
            "password1": "Str0ng!pass",
            "password2": "Different!1",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(count_users(&pool).await, 0);
}

#[sqlx::test]
async fn test_signup_policy_violations_create_no_user(pool: PgPool) {
    let server = common::test_server(pool.clone());

    // One password per violated rule: length, uppercase, lowercase, digit, symbol.
    let rejected = [
        "S0!a",
        "str0ng!pass",
        "STR0NG!PASS",
        "Strong!pass",
        "Str0ngpass",
    ];

    for password in rejected {
        let response = server
            .post("/auth/signup")
            .json(&json!({
                "email": "user@example.com",
                "password1": password,
                "password2": password,
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    assert_eq!(count_users(&pool).await, 0);
}

#[sqlx::test]
async fn test_signup_duplicate_email(pool: PgPool) {
    let server = common::test_server(pool);

    let body = json!({
        "email": "user@example.com",
        "password1": "Str0ng!pass",
        "password2": "Str0ng!pass",
    });

    server.post("/auth/signup").json(&body).await.assert_status_ok();

    let response = server.post("/auth/signup").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_signin_sets_session(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let session = common::signup_and_signin(&server, "user@example.com", "Str0ng!pass").await;

    assert!(!session.jwt.is_empty());

    let user_id: i64 = session.user_id.parse().unwrap();
    assert_eq!(common::count_refresh_rows(&pool, user_id).await, 1);
}

#[sqlx::test]
async fn test_signin_mirrors_token_in_authorization_header(pool: PgPool) {
    let server = common::test_server(pool);

    server
        .post("/auth/signup")
        .json(&json!({
            "email": "user@example.com",
            "password1": "Str0ng!pass",
            "password2": "Str0ng!pass",
        }))
        .await
        .assert_status_ok();

    let response = server
        .post("/auth/signin")
        .json(&json!({ "email": "user@example.com", "password": "Str0ng!pass" }))
        .await;

    response.assert_status_ok();

    let jwt = response.json::<serde_json::Value>()["jwt"]
        .as_str()
        .unwrap()
        .to_string();
    let auth_header = response
        .headers()
        .get(header::AUTHORIZATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    assert_eq!(auth_header, format!("Bearer {jwt}"));
}

#[sqlx::test]
async fn test_second_signin_replaces_refresh_row(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let session = common::signup_and_signin(&server, "user@example.com", "Str0ng!pass").await;
    let user_id: i64 = session.user_id.parse().unwrap();

    let first_row_id =
        sqlx::query_scalar::<_, i64>("SELECT id FROM refresh_tokens WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    server
        .post("/auth/signin")
        .json(&json!({ "email": "user@example.com", "password": "Str0ng!pass" }))
        .await
        .assert_status_ok();

    // Still exactly one row, and it is a new one (old deleted, new inserted).
    assert_eq!(common::count_refresh_rows(&pool, user_id).await, 1);

    let second_row_id =
        sqlx::query_scalar::<_, i64>("SELECT id FROM refresh_tokens WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_ne!(first_row_id, second_row_id);
}

#[sqlx::test]
async fn test_signin_wrong_password(pool: PgPool) {
    let server = common::test_server(pool);

    server
        .post("/auth/signup")
        .json(&json!({
            "email": "user@example.com",
            "password1": "Str0ng!pass",
            "password2": "Str0ng!pass",
        }))
        .await
        .assert_status_ok();

    let response = server
        .post("/auth/signin")
        .json(&json!({ "email": "user@example.com", "password": "Wr0ng!pass" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_signin_unknown_email(pool: PgPool) {
    let server = common::test_server(pool);

    let response = server
        .post("/auth/signin")
        .json(&json!({ "email": "nobody@example.com", "password": "Str0ng!pass" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_refresh_rotates_token_in_place(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let session = common::signup_and_signin(&server, "user@example.com", "Str0ng!pass").await;
    let user_id: i64 = session.user_id.parse().unwrap();

    let (row_id, old_value) = sqlx::query_as::<_, (i64, String)>(
        "SELECT id, token FROM refresh_tokens WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    // Token expiries have second precision; cross a second boundary so the
    // rotated value is guaranteed to differ.
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let response = server
        .get("/auth/refresh")
        .add_header(
            header::COOKIE,
            HeaderValue::from_str(&format!("refresh-token={}", session.refresh_token)).unwrap(),
        )
        .await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>()["jwt"].is_string());
    assert!(common::extract_cookie(&response, "refresh-token").is_some());

    let (new_row_id, new_value) = sqlx::query_as::<_, (i64, String)>(
        "SELECT id, token FROM refresh_tokens WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    // Same row, new value: the rotation never creates a second row.
    assert_eq!(row_id, new_row_id);
    assert_ne!(old_value, new_value);
    assert_eq!(common::count_refresh_rows(&pool, user_id).await, 1);
}

#[sqlx::test]
async fn test_refresh_without_cookie(pool: PgPool) {
    let server = common::test_server(pool);

    let response = server.get("/auth/refresh").await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[sqlx::test]
async fn test_refresh_with_garbage_token(pool: PgPool) {
    let server = common::test_server(pool);

    let response = server
        .get("/auth/refresh")
        .add_header(
            header::COOKIE,
            HeaderValue::from_static("refresh-token=not.a.jwt"),
        )
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[sqlx::test]
async fn test_refresh_rejects_access_token_in_refresh_slot(pool: PgPool) {
    let server = common::test_server(pool);

    let session = common::signup_and_signin(&server, "user@example.com", "Str0ng!pass").await;

    // An access token is signed under the other secret and must not refresh.
    let response = server
        .get("/auth/refresh")
        .add_header(
            header::COOKIE,
            HeaderValue::from_str(&format!("refresh-token={}", session.jwt)).unwrap(),
        )
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}
