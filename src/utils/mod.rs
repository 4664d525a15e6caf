//! Shared helpers.

pub mod alias_generator;
pub mod db_error;
pub mod destination;
pub mod user_agent;
