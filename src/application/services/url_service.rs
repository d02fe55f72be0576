//! Alias creation, lookup, and deletion.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::alias_generator::{generate_alias, validate_custom_alias};

/// Attempts at generating a fresh alias before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for managing alias → destination URL mappings.
pub struct UrlService<L: UrlRepository> {
    urls: Arc<L>,
}

impl<L: UrlRepository> UrlService<L> {
    /// Creates a new URL service.
    pub fn new(urls: Arc<L>) -> Self {
        Self { urls }
    }

    /// Stores a destination URL under an alias and returns the alias used.
    ///
    /// A caller-provided alias is validated and saved as-is; a collision is
    /// reported without retry and leaves the existing mapping untouched.
    /// When no alias is given, a random one is generated, retrying with a
    /// fresh value on collision up to a bounded number of attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid custom alias or a
    /// collision on one (the API reports collisions as a 400), and
    /// [`AppError::Internal`] on database errors or generation exhaustion.
    pub async fn save_url(
        &self,
        destination_url: &str,
        alias: Option<String>,
    ) -> Result<String, AppError> {
        if let Some(custom) = alias {
            validate_custom_alias(&custom)?;

            return match self.urls.save(&custom, destination_url).await {
                Ok(mapping) => Ok(mapping.alias),
                Err(AppError::Conflict { .. }) => Err(AppError::bad_request(
                    "Alias already exists",
                    json!({ "alias": custom }),
                )),
                Err(e) => Err(e),
            };
        }

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = generate_alias();

            match self.urls.save(&candidate, destination_url).await {
                Ok(mapping) => return Ok(mapping.alias),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique alias",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves an alias to its destination URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown alias.
    pub async fn get_url(&self, alias: &str) -> Result<UrlMapping, AppError> {
        self.urls.find_by_alias(alias).await?.ok_or_else(|| {
            AppError::not_found("Alias not found", json!({ "alias": alias }))
        })
    }

    /// Deletes a mapping by alias.
    ///
    /// Deletion affecting zero rows is reported as not found, never silently
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown alias.
    pub async fn delete_url(&self, alias: &str) -> Result<(), AppError> {
        let deleted = self.urls.delete_by_alias(alias).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Alias not found",
                json!({ "alias": alias }),
            ));
        }

        tracing::info!(alias, "deleted url mapping");
        Ok(())
    }
}
