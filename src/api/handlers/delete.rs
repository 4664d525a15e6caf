//! Handler for deleting alias records.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Deletes an alias record by id.
///
/// # Endpoint
///
/// `DELETE /url/{id}` (basic auth required)
///
/// # Errors
///
/// Returns 404 Not Found when the id never existed or was already deleted —
/// a double delete is not a success.
pub async fn delete_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.alias_service.delete(id).await?;

    tracing::info!(id, "alias deleted");

    Ok(StatusCode::NO_CONTENT)
}
