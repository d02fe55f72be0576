//! Alias generation and validation utilities.
//!
//! Provides random alias generation for callers that do not supply their
//! own, and validation for caller-provided aliases.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Length of generated aliases.
const ALIAS_LENGTH: usize = 6;

/// Maximum length accepted for caller-provided aliases.
const MAX_ALIAS_LENGTH: usize = 64;

/// Alphabet for generated aliases: 62 alphanumeric symbols.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Path segments that cannot be used as aliases.
///
/// These collide with API routes and would shadow them on redirect.
const RESERVED_ALIASES: &[&str] = &["auth", "url", "health"];

/// Generates a random 6-character alias over the alphanumeric alphabet.
///
/// The generator does not guarantee uniqueness; a collision surfaces as a
/// conflict from the alias store and is handled by the caller.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias();
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias() -> String {
    let mut rng = rand::rng();

    (0..ALIAS_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a caller-provided alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: letters, digits, hyphens, underscores
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            "Alias must be 1-64 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, hyphens, and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
