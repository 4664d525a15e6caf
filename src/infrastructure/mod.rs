//! Infrastructure layer: SQLite persistence and the telemetry pipeline.

pub mod persistence;
pub mod telemetry;
