//! Persisted refresh token row.

/// Stored refresh token for a user.
///
/// At most one row exists per user: sign-in replaces the row wholesale and
/// refresh rotates `token` in place, keeping the row id stable.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RefreshTokenRecord {
    pub id: i64,
    pub token: String,
    pub user_id: i64,
}
