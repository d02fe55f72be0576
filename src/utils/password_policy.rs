//! Signup password policy.

use crate::error::AppError;
use serde_json::json;

/// Minimum password length accepted at signup.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Validates a signup password against the account policy.
///
/// # Rules
///
/// - At least 8 characters
/// - At least one uppercase letter
/// - At least one lowercase letter
/// - At least one digit
/// - At least one symbol or punctuation character
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the first violated rule.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(policy_error(
            "Password must contain at least 8 characters",
        ));
    }

    let mut upper = false;
    let mut lower = false;
    let mut digit = false;
    let mut symbol = false;

    for c in password.chars() {
        if c.is_uppercase() {
            upper = true;
        } else if c.is_lowercase() {
            lower = true;
        } else if c.is_numeric() {
            digit = true;
        } else if !c.is_whitespace() {
            symbol = true;
        }
    }

    if !upper {
        return Err(policy_error(
            "Password must contain at least one uppercase character",
        ));
    }
    if !lower {
        return Err(policy_error(
            "Password must contain at least one lowercase character",
        ));
    }
    if !digit {
        return Err(policy_error("Password must contain at least one digit"));
    }
    if !symbol {
        return Err(policy_error(
            "Password must contain at least one symbol or punctuation character",
        ));
    }

    Ok(())
}

fn policy_error(message: &str) -> AppError {
    AppError::bad_request(message, json!({ "field": "password1" }))
}
