//! Domain layer: entities, repository traits, and the telemetry event model.

pub mod entities;
pub mod repositories;
pub mod visit_event;
