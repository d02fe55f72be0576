//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements with runtime parameter binding.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Account storage and lookup
//! - [`PgUrlRepository`] - Alias → URL mapping storage
//! - [`PgRefreshTokenRepository`] - Refresh token storage and rotation

pub mod pg_refresh_token_repository;
pub mod pg_url_repository;
pub mod pg_user_repository;

pub use pg_refresh_token_repository::PgRefreshTokenRepository;
pub use pg_url_repository::PgUrlRepository;
pub use pg_user_repository::PgUserRepository;
