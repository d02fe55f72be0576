//! Password hashing with bcrypt.

use crate::error::AppError;
use serde_json::json;

/// One-way salted password hashing with a configurable work factor.
///
/// bcrypt generates a fresh random salt per hash, so hashing the same
/// password twice yields different encodings. Verification goes through the
/// library's constant-time comparison; decoded bytes are never compared
/// manually.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher with the given bcrypt cost.
    ///
    /// The cost is fixed per deployment via configuration.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the hashing backend fails.
    pub fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| {
            tracing::error!("password hashing failed: {e}");
            AppError::internal("Failed to hash password", json!({}))
        })
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the password does not match.
    /// Returns [`AppError::Internal`] if the stored hash is unparseable.
    pub fn verify(&self, hash: &str, plaintext: &str) -> Result<(), AppError> {
        let matches = bcrypt::verify(plaintext, hash).map_err(|e| {
            tracing::error!("password verification failed: {e}");
            AppError::internal("Failed to verify password", json!({}))
        })?;

        if !matches {
            return Err(AppError::unauthorized("Invalid credentials", json!({})));
        }

        Ok(())
    }
}
