//! Repository trait for alias storage.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for alias → destination URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new alias → URL mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, alias: &str, destination_url: &str) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by its alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Deletes a mapping by its alias.
    ///
    /// Returns `Ok(true)` when a row was deleted, `Ok(false)` when the alias
    /// was unknown. Zero affected rows is reported, never silently ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_alias(&self, alias: &str) -> Result<bool, AppError>;
}
