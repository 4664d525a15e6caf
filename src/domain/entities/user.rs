//! User record entity.

use chrono::{DateTime, Utc};

/// A registered user. Created once via registration and immutable afterwards.
///
/// `password_hash` is an opaque bcrypt hash; the raw password is never
/// persisted anywhere.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new user record. The password arrives already
/// hashed — hashing happens in the application layer, not in the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
