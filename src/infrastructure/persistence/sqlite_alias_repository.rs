//! SQLite implementation of the alias repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{AliasRecord, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::{AppError, ConflictField};
use crate::utils::db_error::unique_violation_column;

/// SQLite repository for alias records.
pub struct SqliteAliasRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AliasRepository for SqliteAliasRepository {
    async fn create(&self, new_alias: NewAlias) -> Result<AliasRecord, AppError> {
        let record = sqlx::query_as::<_, AliasRecord>(
            r#"
            INSERT INTO alias_records (destination_url, alias, remaining_uses, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, destination_url, alias, remaining_uses, created_at
            "#,
        )
        .bind(&new_alias.destination_url)
        .bind(&new_alias.alias)
        .bind(new_alias.remaining_uses)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if unique_violation_column(&e).as_deref() == Some("alias") {
                AppError::conflict(
                    ConflictField::Alias,
                    "Alias already exists",
                    json!({ "alias": new_alias.alias }),
                )
            } else {
                tracing::error!("failed to insert alias: {e}");
                AppError::internal("Database error", json!({ "operation": "create_alias" }))
            }
        })?;

        Ok(record)
    }

    async fn resolve_and_consume(&self, alias: &str) -> Result<Option<String>, AppError> {
        // Check, decrement, and fetch as a single statement. SQLite executes
        // the conditional update atomically, so no two concurrent resolves
        // can observe the same pre-decrement value and the counter can never
        // go below zero.
        let destination = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE alias_records
            SET remaining_uses = remaining_uses - 1
            WHERE alias = ?1 AND remaining_uses > 0
            RETURNING destination_url
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("failed to resolve alias: {e}");
            AppError::internal("Database error", json!({ "operation": "resolve_alias" }))
        })?;

        Ok(destination)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM alias_records WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                tracing::error!("failed to delete alias: {e}");
                AppError::internal("Database error", json!({ "operation": "delete_alias" }))
            })?;

        Ok(result.rows_affected() > 0)
    }
}
