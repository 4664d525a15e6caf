//! SQLite-backed persistence.

mod sqlite_alias_repository;
mod sqlite_user_repository;

pub use sqlite_alias_repository::SqliteAliasRepository;
pub use sqlite_user_repository::SqliteUserRepository;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Opens a SQLite connection pool suitable for concurrent request handling.
///
/// WAL journaling lets readers proceed alongside the single writer, and the
/// busy timeout makes concurrent writers queue instead of failing with
/// `SQLITE_BUSY`.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
