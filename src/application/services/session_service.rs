//! Session lifecycle: access/refresh token issuance, rotation, and checks.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::User;
use crate::domain::repositories::{RefreshTokenRepository, UserRepository};
use crate::error::AppError;

/// Typed claims embedded in access tokens.
///
/// Decoding rejects tokens with absent or mistyped fields instead of
/// surfacing them as runtime faults.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub id: i64,
    pub email: String,
    pub exp: i64,
}

/// Typed claims embedded in refresh tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub user_id: i64,
    pub exp: i64,
}

/// Signing configuration for the session manager.
///
/// Access and refresh tokens are signed under two distinct secrets so that
/// neither verifies under the other's key. Both values come from explicit
/// configuration, never from ambient globals.
#[derive(Clone)]
pub struct TokenConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

/// Freshly minted token pair returned on sign-in and refresh.
#[derive(Debug)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Service owning token issuance, rotation, and request-time verification.
///
/// The refresh-token table holds at most one live row per user: sign-in
/// deletes any prior row before inserting, and refresh rotates the stored
/// value in place without creating a second row.
pub struct SessionService<R: RefreshTokenRepository, U: UserRepository> {
    refresh_tokens: Arc<R>,
    users: Arc<U>,
    config: TokenConfig,
}

impl<R: RefreshTokenRepository, U: UserRepository> SessionService<R, U> {
    /// Creates a new session service.
    pub fn new(refresh_tokens: Arc<R>, users: Arc<U>, config: TokenConfig) -> Self {
        Self {
            refresh_tokens,
            users,
            config,
        }
    }

    /// Issues a fresh access/refresh token pair on sign-in.
    ///
    /// Any previously stored refresh token for the user is deleted before
    /// the new one is inserted, keeping at most one live row per user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on signing or database errors.
    pub async fn issue_session(&self, user: &User) -> Result<SessionTokens, AppError> {
        let access_token = self.create_access_token(user)?;
        let refresh_token = self.create_refresh_token(user.id)?;

        self.refresh_tokens.delete_by_user_id(user.id).await?;
        self.refresh_tokens.insert(user.id, &refresh_token).await?;

        tracing::info!(user_id = user.id, "issued new session");

        Ok(SessionTokens {
            access_token,
            refresh_token,
        })
    }

    /// Rotates a refresh token and mints a new access token.
    ///
    /// The presented token must carry a valid signature and expiry; a token
    /// failing that check has any matching stored row deleted before the
    /// request is rejected. A mismatch between the presented value and the
    /// stored one is logged but not rejected on its own; rejection fires
    /// when the stored row belongs to a different user than the token
    /// claims.
    ///
    /// On success the stored row keeps its id and receives the new token
    /// value; no second row is created.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] on invalid, expired, or mismatched
    /// tokens, and [`AppError::Internal`] on database errors.
    pub async fn refresh_session(
        &self,
        presented: &str,
    ) -> Result<(User, SessionTokens), AppError> {
        let claims = match self.decode_refresh(presented) {
            Ok(claims) => claims,
            Err(_) => {
                if let Err(e) = self.refresh_tokens.delete_by_value(presented).await {
                    tracing::error!("failed to delete rejected refresh token: {e}");
                }
                return Err(permission_denied());
            }
        };

        let user = self
            .users
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(permission_denied)?;

        let stored = self
            .refresh_tokens
            .find_by_user_id(user.id)
            .await?
            .ok_or_else(permission_denied)?;

        if stored.token != presented {
            tracing::warn!(
                user_id = user.id,
                "presented refresh token differs from stored value"
            );
        }

        if stored.user_id != claims.user_id {
            return Err(permission_denied());
        }

        let new_refresh = self.create_refresh_token(user.id)?;
        self.refresh_tokens
            .update_value(stored.id, &new_refresh)
            .await?;

        let access_token = self.create_access_token(&user)?;

        tracing::info!(user_id = user.id, "rotated refresh token");

        Ok((
            user,
            SessionTokens {
                access_token,
                refresh_token: new_refresh,
            },
        ))
    }

    /// Verifies an access token: signature and expiry only.
    ///
    /// Deliberately skips any storage round-trip so request-time checks stay
    /// cheap; access tokens cannot be revoked before their natural expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] on any verification failure.
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, AppError> {
        decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.config.access_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|_| permission_denied())
    }

    fn create_access_token(&self, user: &User) -> Result<String, AppError> {
        let claims = AccessClaims {
            id: user.id,
            email: user.email.clone(),
            exp: (Utc::now() + self.config.access_ttl).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.access_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("failed to sign access token: {e}");
            AppError::internal("Failed to create token", json!({}))
        })
    }

    fn create_refresh_token(&self, user_id: i64) -> Result<String, AppError> {
        let claims = RefreshClaims {
            user_id,
            exp: (Utc::now() + self.config.refresh_ttl).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.refresh_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("failed to sign refresh token: {e}");
            AppError::internal("Failed to create token", json!({}))
        })
    }

    fn decode_refresh(&self, token: &str) -> Result<RefreshClaims, jsonwebtoken::errors::Error> {
        decode::<RefreshClaims>(
            token,
            &DecodingKey::from_secret(self.config.refresh_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
    }
}

/// Uniform rejection used by every authorization failure in this module.
fn permission_denied() -> AppError {
    AppError::forbidden("authorization failed", json!({}))
}
