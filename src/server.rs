//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, migrations, telemetry pipeline lifecycle,
//! and the Axum server.

use crate::application::services::{AliasService, AuthService};
use crate::config::Config;
use crate::infrastructure::persistence::{self, SqliteAliasRepository, SqliteUserRepository};
use crate::infrastructure::telemetry::{FileSink, TelemetryPipeline};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (WAL, busy timeout)
/// - Migrations
/// - Visit telemetry pipeline (started here, drained on shutdown)
/// - Axum HTTP server with graceful ctrl-c shutdown
///
/// # Errors
///
/// Returns an error if the database connection, migrations, bind, or server
/// runtime fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let alias_repository = Arc::new(SqliteAliasRepository::new(pool.clone()));
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));

    let alias_service = Arc::new(AliasService::new(alias_repository, config.default_max_uses));
    let auth_service = Arc::new(AuthService::new(user_repository));

    let sink = Arc::new(FileSink::new(&config.visit_log_path));
    let pipeline = TelemetryPipeline::new(config.visit_queue_capacity, sink);
    let visits = pipeline.handle();
    let running = pipeline.start();
    tracing::info!(
        capacity = config.visit_queue_capacity,
        "Visit pipeline started"
    );

    let state = AppState::new(alias_service, auth_service, visits);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // Requests have stopped; write out whatever telemetry is still queued.
    running.shutdown().await;
    tracing::info!("Visit pipeline drained");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}
