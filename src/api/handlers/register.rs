//! Handler for user registration.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::api::dto::register::{RegisterUserRequest, RegisterUserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure and 409 Conflict on a
/// duplicate username or email; the error body names the offending field.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<RegisterUserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .auth_service
        .register(payload.username, payload.email, payload.password)
        .await?;

    tracing::info!(id = user.id, username = %user.username, "user registered");

    Ok((StatusCode::CREATED, Json(RegisterUserResponse { id: user.id })))
}
