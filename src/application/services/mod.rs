//! Business logic services for the application layer.

pub mod account_service;
pub mod password_hasher;
pub mod session_service;
pub mod url_service;

pub use account_service::AccountService;
pub use password_hasher::PasswordHasher;
pub use session_service::{AccessClaims, SessionService, SessionTokens, TokenConfig};
pub use url_service::UrlService;
