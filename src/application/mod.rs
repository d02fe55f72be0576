//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, credential checks, and token handling. Services consume
//! repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Registration and credential checks
//! - [`services::session_service::SessionService`] - Token issuance, rotation, verification
//! - [`services::url_service::UrlService`] - Alias creation, lookup, deletion
//! - [`services::password_hasher::PasswordHasher`] - bcrypt hashing and verification

pub mod services;
