//! DTOs for signup, signin, and token responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new account.
///
/// The password is submitted twice; the handler rejects mismatched pairs
/// before the policy check runs.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password1: String,

    pub password2: String,
}

/// Request to sign in with existing credentials.
#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Response carrying a freshly minted access token.
///
/// The same token is mirrored in the `Authorization` response header; the
/// refresh token travels only in an HttpOnly cookie.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub jwt: String,
}

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
