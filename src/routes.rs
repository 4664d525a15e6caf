//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`   - Alias redirect (public)
//! - `POST   /register`  - User registration (public)
//! - `POST   /url`       - Save alias (basic auth)
//! - `DELETE /url/{id}`  - Delete alias record (basic auth)
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Authentication** - HTTP basic credentials on the `/url` routes

use axum::routing::{delete, get, post};
use axum::{middleware, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::api::handlers::{delete_handler, redirect_handler, register_handler, save_handler};
use crate::api::middleware::auth;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/url", post(save_handler))
        .route("/url/{id}", delete(delete_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/register", post(register_handler))
        .merge(protected)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}
