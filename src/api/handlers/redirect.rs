//! Handler for alias redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;

use crate::domain::visit_event::VisitEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its destination URL, consuming one use of quota.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Request Flow
///
/// 1. Offer a visit event to the telemetry queue (fire-and-forget; a full
///    queue drops the event and never delays or fails the redirect)
/// 2. Atomically check-decrement-fetch the alias quota
/// 3. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 404 Not Found when the alias does not exist or its quota is
/// exhausted — the two are indistinguishable by design.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let event = VisitEvent::new(
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()),
        headers.get("x-real-ip").and_then(|v| v.to_str().ok()),
        Some(addr.ip()),
    );
    let _ = state.visits.offer(event);

    let destination = state.alias_service.resolve(&alias).await?;

    Ok(Redirect::temporary(&destination))
}
