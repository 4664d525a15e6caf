//! HTTP basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates requests with HTTP basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic <base64(username:password)>
/// ```
///
/// Credentials are checked against the stored bcrypt hash. An unknown
/// username and a wrong password both collapse to a plain `401` here so the
/// response does not reveal which accounts exist; the distinction stays
/// available to in-process callers of
/// [`AuthService::verify`](crate::application::services::AuthService::verify).
///
/// 401 responses carry a `WWW-Authenticate: Basic` challenge.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::invalid_credentials("Unauthorized"))?;

    let req = Request::from_parts(parts, body);

    let password = password.unwrap_or_default();
    match st.auth_service.verify(&username, &password).await {
        Ok(()) => Ok(next.run(req).await),
        Err(AppError::NotFound { .. } | AppError::InvalidCredentials { .. }) => {
            tracing::warn!(username = %username, "rejected basic auth attempt");
            Err(AppError::invalid_credentials("Unauthorized"))
        }
        Err(e) => Err(e),
    }
}
