//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AccountService, PasswordHasher, SessionService, TokenConfig, UrlService,
};
use crate::infrastructure::persistence::{
    PgRefreshTokenRepository, PgUrlRepository, PgUserRepository,
};

/// Shared state wiring services to their PostgreSQL repositories.
///
/// Cloning is cheap; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub account_service: Arc<AccountService<PgUserRepository>>,
    pub session_service: Arc<SessionService<PgRefreshTokenRepository, PgUserRepository>>,
    pub url_service: Arc<UrlService<PgUrlRepository>>,
}

impl AppState {
    /// Builds the full service graph on top of a connection pool.
    pub fn build(pool: PgPool, token_config: TokenConfig, bcrypt_cost: u32) -> Self {
        let pool = Arc::new(pool);

        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let url_repository = Arc::new(PgUrlRepository::new(pool.clone()));
        let refresh_token_repository = Arc::new(PgRefreshTokenRepository::new(pool.clone()));

        let hasher = Arc::new(PasswordHasher::new(bcrypt_cost));

        let account_service = Arc::new(AccountService::new(user_repository.clone(), hasher));
        let session_service = Arc::new(SessionService::new(
            refresh_token_repository,
            user_repository,
            token_config,
        ));
        let url_service = Arc::new(UrlService::new(url_repository));

        Self {
            db: pool,
            account_service,
            session_service,
            url_service,
        }
    }
}
