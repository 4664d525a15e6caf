//! Helpers for classifying SQLite constraint violations.

/// Extracts the violated column from a unique-constraint error, if any.
///
/// SQLite does not expose constraint names through the driver the way
/// Postgres does, but its message carries the offending column as
/// `UNIQUE constraint failed: <table>.<column>`.
pub fn unique_violation_column(e: &sqlx::Error) -> Option<String> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    column_from_message(db_err.message())
}

fn column_from_message(message: &str) -> Option<String> {
    let qualified = message.strip_prefix("UNIQUE constraint failed: ")?;

    // On multi-column constraints SQLite lists every column; the first one
    // identifies the conflict well enough for our single-column uniques.
    let first = qualified.split(',').next()?.trim();
    let column = first.rsplit('.').next()?;

    if column.is_empty() {
        None
    } else {
        Some(column.to_string())
    }
}
