//! Url mapping entity representing a short alias.

use chrono::{DateTime, Utc};

/// Mapping from a short alias to its destination URL.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    pub destination_url: String,
    pub created_at: DateTime<Utc>,
}
