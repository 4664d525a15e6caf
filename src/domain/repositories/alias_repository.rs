//! Repository trait for alias record data access.

use crate::domain::entities::{AliasRecord, NewAlias};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for alias records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteAliasRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Inserts a new alias record.
    ///
    /// Uniqueness of the alias is enforced by the store's unique constraint,
    /// which is the sole arbiter — there is deliberately no "does it exist"
    /// pre-check, because a concurrent insert could slip between check and
    /// insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] with [`ConflictField::Alias`] when the
    /// alias is already taken, [`AppError::Internal`] on database errors.
    ///
    /// [`ConflictField::Alias`]: crate::error::ConflictField::Alias
    async fn create(&self, new_alias: NewAlias) -> Result<AliasRecord, AppError>;

    /// Atomically consumes one use of an alias and returns its destination.
    ///
    /// The lookup, quota check, and decrement execute as one indivisible
    /// store operation. Under concurrent calls against a quota of `k`,
    /// exactly `min(calls, k)` succeed and the counter never goes negative.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(destination_url))` when the alias exists with remaining quota
    /// - `Ok(None)` when the alias is absent **or** exhausted — the two cases
    ///   are intentionally indistinguishable
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn resolve_and_consume(&self, alias: &str) -> Result<Option<String>, AppError>;

    /// Deletes an alias record by primary key.
    ///
    /// Returns `Ok(true)` when a row was removed, `Ok(false)` when the id
    /// never existed or was already deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}
