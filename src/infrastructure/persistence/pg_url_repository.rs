//! PostgreSQL implementation of the alias repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for alias → URL mappings.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save(&self, alias: &str, destination_url: &str) -> Result<UrlMapping, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO urls (alias, destination_url)
            VALUES ($1, $2)
            RETURNING id, alias, destination_url, created_at
            "#,
        )
        .bind(alias)
        .bind(destination_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, alias, destination_url, created_at
            FROM urls
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn delete_by_alias(&self, alias: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM urls
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
