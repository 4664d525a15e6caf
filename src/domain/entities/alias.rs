//! Alias record entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored alias pointing at a destination URL.
///
/// `remaining_uses` is the resolution quota left for the alias. The store
/// guarantees it never goes below zero; once it reaches zero the alias
/// resolves as if it did not exist, although the row itself persists until
/// explicitly deleted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AliasRecord {
    pub id: i64,
    pub destination_url: String,
    pub alias: String,
    pub remaining_uses: i64,
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new alias record.
#[derive(Debug, Clone)]
pub struct NewAlias {
    pub destination_url: String,
    pub alias: String,
    pub remaining_uses: i64,
}
