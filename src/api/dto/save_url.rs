//! DTOs for the URL save endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for alias validation.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to store a destination URL under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveUrlRequest {
    /// The destination URL (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional caller-chosen alias; a random one is generated when absent.
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub alias: Option<String>,
}

/// Response confirming a stored mapping.
#[derive(Debug, Serialize)]
pub struct SaveUrlResponse {
    pub status: &'static str,
    pub alias: String,
}
