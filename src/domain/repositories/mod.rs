//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Account creation and lookup
//! - [`UrlRepository`] - Alias → URL mapping CRUD
//! - [`RefreshTokenRepository`] - Persisted refresh token management

pub mod refresh_token_repository;
pub mod url_repository;
pub mod user_repository;

pub use refresh_token_repository::RefreshTokenRepository;
pub use url_repository::UrlRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use refresh_token_repository::MockRefreshTokenRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
