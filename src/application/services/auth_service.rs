//! Credential registration and validation service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewUser, UserRecord};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for registering users and validating their credentials.
///
/// Passwords go through bcrypt (salted, adaptive, fixed work factor) before
/// storage; the raw password never reaches the repository. Hashing and
/// verification run on the blocking thread pool so the deliberately slow
/// hash never stalls the async workers.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    cost: u32,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new service with the default bcrypt work factor.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_cost(repository, bcrypt::DEFAULT_COST)
    }

    /// Creates a service with an explicit bcrypt cost. Tests use a low cost
    /// to keep hashing fast.
    pub fn with_cost(repository: Arc<R>, cost: u32) -> Self {
        Self { repository, cost }
    }

    /// Registers a new user, hashing the raw password first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] tagged with the violated column
    /// (username or email), [`AppError::Internal`] if hashing fails or the
    /// database errors.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<UserRecord, AppError> {
        let cost = self.cost;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| {
                tracing::error!("hashing task failed: {e}");
                AppError::internal("Password hashing failed", json!({}))
            })?
            .map_err(|e| {
                tracing::error!("bcrypt hash error: {e}");
                AppError::internal("Password hashing failed", json!({}))
            })?;

        self.repository
            .create(NewUser {
                username,
                email,
                password_hash,
            })
            .await
    }

    /// Validates a username/password pair.
    ///
    /// The three outcomes stay distinguishable for callers: `Ok(())` on a
    /// match, [`AppError::NotFound`] for an unknown username, and
    /// [`AppError::InvalidCredentials`] for a wrong password. Comparison uses
    /// bcrypt's built-in constant-time verify. There is no lockout or backoff
    /// here; rate limiting belongs to an outer layer.
    ///
    /// # Errors
    ///
    /// Also returns [`AppError::Internal`] on database or hashing failures.
    pub async fn verify(&self, username: &str, password: &str) -> Result<(), AppError> {
        let stored_hash = self
            .repository
            .find_password_hash(username)
            .await?
            .ok_or_else(|| {
                AppError::not_found("User not found", json!({ "username": username }))
            })?;

        let candidate = password.to_string();
        let matches =
            tokio::task::spawn_blocking(move || bcrypt::verify(candidate, &stored_hash))
                .await
                .map_err(|e| {
                    tracing::error!("verify task failed: {e}");
                    AppError::internal("Password verification failed", json!({}))
                })?
                .map_err(|e| {
                    tracing::error!("bcrypt verify error: {e}");
                    AppError::internal("Password verification failed", json!({}))
                })?;

        if matches {
            Ok(())
        } else {
            Err(AppError::invalid_credentials("Invalid password"))
        }
    }
}
