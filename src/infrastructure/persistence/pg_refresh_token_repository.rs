//! PostgreSQL implementation of the refresh-token repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::RefreshTokenRecord;
use crate::domain::repositories::RefreshTokenRepository;
use crate::error::AppError;

/// PostgreSQL repository for persisted refresh tokens.
///
/// Rows cascade-delete with their owning user.
pub struct PgRefreshTokenRepository {
    pool: Arc<PgPool>,
}

impl PgRefreshTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    async fn insert(&self, user_id: i64, token: &str) -> Result<RefreshTokenRecord, AppError> {
        let record = sqlx::query_as::<_, RefreshTokenRecord>(
            r#"
            INSERT INTO refresh_tokens (token, user_id)
            VALUES ($1, $2)
            RETURNING id, token, user_id
            "#,
        )
        .bind(token)
        .bind(user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Option<RefreshTokenRecord>, AppError> {
        let record = sqlx::query_as::<_, RefreshTokenRecord>(
            r#"
            SELECT id, token, user_id
            FROM refresh_tokens
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn update_value(&self, id: i64, token: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET token = $1
            WHERE id = $2
            "#,
        )
        .bind(token)
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete_by_user_id(&self, user_id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            DELETE FROM refresh_tokens
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete_by_value(&self, token: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            DELETE FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
