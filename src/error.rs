//! Application error type shared by all layers.
//!
//! Errors form a closed set of tagged variants so callers branch on the
//! variant (and, for conflicts, on [`ConflictField`]) instead of inspecting
//! message text. Each variant carries a human-readable message plus a JSON
//! details payload for the HTTP error body.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Which unique column a conflict originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictField {
    Alias,
    Username,
    Email,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Row absent — or, for aliases, quota exhausted. Callers cannot and must
    /// not tell the two apart.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Unique-constraint violation, tagged with the offending column.
    #[error("{message}")]
    Conflict {
        field: ConflictField,
        message: String,
        details: Value,
    },

    /// Authentication mismatch (unknown user or wrong password, as reported
    /// by the credential store).
    #[error("{message}")]
    InvalidCredentials { message: String },

    /// Storage or engine failure. Never carries a business reason.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(field: ConflictField, message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            field,
            message: message.into(),
            details,
        }
    }
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errs: validator::ValidationErrors) -> Self {
        Self::bad_request(
            "Request validation failed",
            serde_json::to_value(&errs).unwrap_or_else(|_| json!({})),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let challenge = matches!(self, AppError::InvalidCredentials { .. });

        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict {
                field,
                message,
                details,
            } => (
                StatusCode::CONFLICT,
                "conflict",
                message,
                json!({ "field": field, "detail": details }),
            ),
            AppError::InvalidCredentials { message } => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                message,
                json!({}),
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        let mut response = (status, Json(body)).into_response();
        if challenge {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"curtail\""),
            );
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_field_is_matchable() {
        let err = AppError::conflict(ConflictField::Username, "taken", json!({}));
        assert!(matches!(
            err,
            AppError::Conflict {
                field: ConflictField::Username,
                ..
            }
        ));
    }

    #[test]
    fn invalid_credentials_response_carries_challenge() {
        let response = AppError::invalid_credentials("Unauthorized").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::not_found("missing", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
