//! # curtail
//!
//! A quota-limited URL alias service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - entities, repository traits, and the
//!   visit event model
//! - **Application Layer** ([`application`]) - alias and credential services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and
//!   the visit telemetry pipeline
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Every alias carries a resolution quota, consumed atomically on each
//!   successful redirect; an exhausted alias resolves like a missing one
//! - Best-effort visit telemetry: a bounded queue with drop-on-overflow
//!   feeds one background consumer that parses user agents and appends
//!   records to a log file, entirely off the request path
//! - HTTP basic authentication backed by bcrypt password hashes
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional; defaults use ./curtail.db
//! export DATABASE_URL="sqlite:curtail.db"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasService, AuthService};
    pub use crate::domain::entities::{AliasRecord, NewAlias, NewUser, UserRecord};
    pub use crate::domain::visit_event::{VisitEvent, VisitRecord};
    pub use crate::error::{AppError, ConflictField};
    pub use crate::infrastructure::telemetry::{OfferOutcome, TelemetryPipeline};
    pub use crate::state::AppState;
}
