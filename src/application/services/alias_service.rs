//! Alias registration, resolution, and deletion service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{AliasRecord, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;
use crate::utils::alias_generator::{generate_alias, validate_requested_alias};
use crate::utils::destination::normalize_destination;

/// Service for managing aliases and resolving them against their quota.
pub struct AliasService<R: AliasRepository> {
    repository: Arc<R>,
    default_max_uses: i64,
}

impl<R: AliasRepository> AliasService<R> {
    /// Creates a new alias service.
    ///
    /// `default_max_uses` is the quota assigned when a caller does not
    /// specify one.
    pub fn new(repository: Arc<R>, default_max_uses: i64) -> Self {
        Self {
            repository,
            default_max_uses,
        }
    }

    /// Registers a destination URL under an alias.
    ///
    /// When the caller requests no alias, a random candidate is generated
    /// here — the repository only persists. There is no existence pre-check:
    /// the store's unique constraint is the single arbiter, so a losing
    /// concurrent registration surfaces as a conflict rather than silently
    /// double-assigning the alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed destination, alias,
    /// or negative quota; [`AppError::Conflict`] when the alias is taken.
    pub async fn save_alias(
        &self,
        destination_url: String,
        requested_alias: Option<String>,
        max_uses: Option<i64>,
    ) -> Result<AliasRecord, AppError> {
        let destination_url = normalize_destination(&destination_url)?;

        let alias = match requested_alias {
            Some(requested) => {
                validate_requested_alias(&requested)?;
                requested
            }
            None => generate_alias(),
        };

        let remaining_uses = max_uses.unwrap_or(self.default_max_uses);
        if remaining_uses < 0 {
            return Err(AppError::bad_request(
                "max_uses cannot be negative",
                json!({ "max_uses": remaining_uses }),
            ));
        }

        self.repository
            .create(NewAlias {
                destination_url,
                alias,
                remaining_uses,
            })
            .await
    }

    /// Resolves an alias, consuming one use of its quota.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the alias does not exist or its
    /// quota is exhausted — deliberately the same signal for both.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.repository
            .resolve_and_consume(alias)
            .await?
            .ok_or_else(|| AppError::not_found("Alias not found", json!({ "alias": alias })))
    }

    /// Deletes an alias record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no row was removed.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Alias record not found",
                json!({ "id": id }),
            ))
        }
    }
}
