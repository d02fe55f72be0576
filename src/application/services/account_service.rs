//! Account registration and credential verification.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::PasswordHasher;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for creating accounts and checking sign-in credentials.
pub struct AccountService<U: UserRepository> {
    users: Arc<U>,
    hasher: Arc<PasswordHasher>,
}

impl<U: UserRepository> AccountService<U> {
    /// Creates a new account service.
    pub fn new(users: Arc<U>, hasher: Arc<PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Registers a new account with the given email and plaintext password.
    ///
    /// The password is hashed before it reaches the repository; the plaintext
    /// is never stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already registered
    /// (the API reports duplicates as a 400, like any other rejected input).
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        let password_hash = self.hasher.hash(password)?;

        match self.users.create(email, &password_hash).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "registered new user");
                Ok(user)
            }
            Err(AppError::Conflict { .. }) => Err(AppError::bad_request(
                "Email is already registered",
                json!({ "email": email }),
            )),
            Err(e) => Err(e),
        }
    }

    /// Verifies sign-in credentials and returns the matching user.
    ///
    /// Unknown email and wrong password produce the same error shape, so the
    /// response does not reveal which part failed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on unknown email or bad password.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials", json!({})))?;

        self.hasher.verify(&user.password_hash, password)?;

        Ok(user)
    }
}
