//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered account holder.
///
/// The `password_hash` field carries the bcrypt-encoded password and is
/// treated as opaque outside the password hasher.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_construction() {
        let user = User {
            id: 1,
            email: "user@example.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            created_at: Utc::now(),
        };

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "user@example.com");
        assert!(user.password_hash.starts_with("$2b$"));
    }
}
