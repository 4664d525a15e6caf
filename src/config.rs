//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup. Every variable has a default, so
//! a bare `cargo run` works against a local SQLite file.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database URL (default: `sqlite:curtail.db`)
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `VISIT_LOG_PATH` - telemetry sink file (default: `visits.log`)
//! - `VISIT_QUEUE_CAPACITY` - telemetry buffer slots (default: 100, min: 1)
//! - `DEFAULT_MAX_USES` - quota assigned when a save request omits one
//!   (default: 10)
//! - `DB_MAX_CONNECTIONS` - connection pool size (default: 10)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Append-only sink file for parsed visit records.
    pub visit_log_path: String,
    /// Capacity of the bounded visit queue; events beyond it are dropped.
    pub visit_queue_capacity: usize,
    /// Resolution quota for aliases saved without an explicit `max_uses`.
    pub default_max_uses: i64,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:curtail.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let visit_log_path =
            env::var("VISIT_LOG_PATH").unwrap_or_else(|_| "visits.log".to_string());

        let visit_queue_capacity = env::var("VISIT_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100)
            .max(1);

        let default_max_uses = env::var("DEFAULT_MAX_USES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            visit_log_path,
            visit_queue_capacity,
            default_max_uses,
            db_max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "DATABASE_URL",
            "LISTEN",
            "RUST_LOG",
            "LOG_FORMAT",
            "VISIT_LOG_PATH",
            "VISIT_QUEUE_CAPACITY",
            "DEFAULT_MAX_USES",
            "DB_MAX_CONNECTIONS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_without_environment() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite:curtail.db");
        assert_eq!(config.visit_queue_capacity, 100);
        assert_eq!(config.default_max_uses, 10);
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn environment_overrides_defaults() {
        clear_env();
        env::set_var("DATABASE_URL", "sqlite::memory:");
        env::set_var("VISIT_QUEUE_CAPACITY", "250");
        env::set_var("DEFAULT_MAX_USES", "5");

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.visit_queue_capacity, 250);
        assert_eq!(config.default_max_uses, 5);

        clear_env();
    }

    #[test]
    #[serial]
    fn queue_capacity_has_a_floor_of_one() {
        clear_env();
        env::set_var("VISIT_QUEUE_CAPACITY", "0");

        let config = Config::from_env().unwrap();
        assert_eq!(config.visit_queue_capacity, 1);

        clear_env();
    }
}
