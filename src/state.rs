//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AliasService, AuthService};
use crate::infrastructure::persistence::{SqliteAliasRepository, SqliteUserRepository};
use crate::infrastructure::telemetry::TelemetryHandle;

#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService<SqliteAliasRepository>>,
    pub auth_service: Arc<AuthService<SqliteUserRepository>>,
    /// Producer side of the visit telemetry pipeline.
    pub visits: TelemetryHandle,
}

impl AppState {
    pub fn new(
        alias_service: Arc<AliasService<SqliteAliasRepository>>,
        auth_service: Arc<AuthService<SqliteUserRepository>>,
        visits: TelemetryHandle,
    ) -> Self {
        Self {
            alias_service,
            auth_service,
            visits,
        }
    }
}
