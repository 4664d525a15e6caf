//! SQLite implementation of the user repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, UserRecord};
use crate::domain::repositories::UserRepository;
use crate::error::{AppError, ConflictField};
use crate::utils::db_error::unique_violation_column;

/// SQLite repository for user records.
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<UserRecord, AppError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO user_records (username, email, password_hash, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match unique_violation_column(&e).as_deref() {
            Some("username") => AppError::conflict(
                ConflictField::Username,
                "Username already exists",
                json!({ "username": new_user.username }),
            ),
            Some("email") => AppError::conflict(
                ConflictField::Email,
                "Email already exists",
                json!({ "email": new_user.email }),
            ),
            _ => {
                tracing::error!("failed to insert user: {e}");
                AppError::internal("Database error", json!({ "operation": "create_user" }))
            }
        })?;

        Ok(record)
    }

    async fn find_password_hash(&self, username: &str) -> Result<Option<String>, AppError> {
        let hash = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM user_records WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("failed to load password hash: {e}");
            AppError::internal("Database error", json!({ "operation": "find_password_hash" }))
        })?;

        Ok(hash)
    }
}
