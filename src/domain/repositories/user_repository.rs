//! Repository trait for user record data access.

use crate::domain::entities::{NewUser, UserRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for registered users.
///
/// Users are write-once: no update or delete operations exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user record with an already-hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] tagged with
    /// [`ConflictField::Username`] or [`ConflictField::Email`] depending on
    /// which unique column was violated, [`AppError::Internal`] on other
    /// database errors.
    ///
    /// [`ConflictField::Username`]: crate::error::ConflictField::Username
    /// [`ConflictField::Email`]: crate::error::ConflictField::Email
    async fn create(&self, new_user: NewUser) -> Result<UserRecord, AppError>;

    /// Looks up the stored password hash for a username.
    ///
    /// Returns `Ok(None)` when no such user exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_password_hash(&self, username: &str) -> Result<Option<String>, AppError>;
}
