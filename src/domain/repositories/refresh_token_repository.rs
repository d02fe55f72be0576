//! Repository trait for persisted refresh tokens.

use crate::domain::entities::RefreshTokenRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the refresh-token table.
///
/// The table holds at most one live row per user. Callers maintain that
/// invariant with `delete_by_user_id` followed by `insert` on sign-in, and
/// `update_value` (same row, new token) on refresh.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRefreshTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Inserts a refresh token row for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, user_id: i64, token: &str) -> Result<RefreshTokenRecord, AppError>;

    /// Finds the stored refresh token for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_user_id(&self, user_id: i64)
    -> Result<Option<RefreshTokenRecord>, AppError>;

    /// Replaces the token value of an existing row, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_value(&self, id: i64, token: &str) -> Result<(), AppError>;

    /// Deletes any refresh token rows belonging to a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_user_id(&self, user_id: i64) -> Result<(), AppError>;

    /// Deletes any row holding the given token value.
    ///
    /// Used as defense in depth when a presented token fails validation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_value(&self, token: &str) -> Result<(), AppError>;
}
