#![allow(dead_code)]

use std::io;
use std::sync::Arc;

use curtail::application::services::{AliasService, AuthService};
use curtail::domain::visit_event::VisitRecord;
use curtail::infrastructure::persistence::{SqliteAliasRepository, SqliteUserRepository};
use curtail::infrastructure::telemetry::{TelemetryPipeline, VisitSink};
use curtail::state::AppState;
use sqlx::SqlitePool;

/// Low bcrypt cost keeps credential tests fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_DEFAULT_MAX_USES: i64 = 10;

/// Sink that discards every record; used where telemetry output is irrelevant.
pub struct NullSink;

impl VisitSink for NullSink {
    fn append(&self, _record: &VisitRecord) -> io::Result<()> {
        Ok(())
    }
}

/// Builds an [`AppState`] over the given pool plus the telemetry pipeline
/// backing its visit handle. The pipeline is returned un-started so tests
/// control when (and whether) consumption begins; keep it alive for the
/// duration of the test.
pub fn create_test_state(pool: SqlitePool, sink: Arc<dyn VisitSink>) -> (AppState, TelemetryPipeline) {
    let pool = Arc::new(pool);

    let alias_service = Arc::new(AliasService::new(
        Arc::new(SqliteAliasRepository::new(pool.clone())),
        TEST_DEFAULT_MAX_USES,
    ));
    let auth_service = Arc::new(AuthService::with_cost(
        Arc::new(SqliteUserRepository::new(pool)),
        TEST_BCRYPT_COST,
    ));

    let pipeline = TelemetryPipeline::new(100, sink);
    let state = AppState::new(alias_service, auth_service, pipeline.handle());

    (state, pipeline)
}

pub async fn remaining_uses(pool: &SqlitePool, alias: &str) -> i64 {
    sqlx::query_scalar("SELECT remaining_uses FROM alias_records WHERE alias = ?1")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn alias_row_count(pool: &SqlitePool, alias: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM alias_records WHERE alias = ?1")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn basic_auth_header(username: &str, password: &str) -> String {
    use base64::Engine as _;

    let credentials =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {credentials}")
}
