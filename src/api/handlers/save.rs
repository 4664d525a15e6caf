//! Handler for saving aliases.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::api::dto::save::{SaveAliasRequest, SaveAliasResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a destination URL under a new alias.
///
/// # Endpoint
///
/// `POST /url` (basic auth required)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/x", "alias": "promo", "max_uses": 2 }
/// ```
///
/// `alias` and `max_uses` are optional.
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure and 409 Conflict when the
/// alias is already taken.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveAliasRequest>,
) -> Result<(StatusCode, Json<SaveAliasResponse>), AppError> {
    payload.validate()?;

    let record = state
        .alias_service
        .save_alias(payload.url, payload.alias, payload.max_uses)
        .await?;

    tracing::info!(id = record.id, alias = %record.alias, "alias saved");

    Ok((
        StatusCode::CREATED,
        Json(SaveAliasResponse {
            id: record.id,
            alias: record.alias,
        }),
    ))
}
