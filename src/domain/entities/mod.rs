//! Core business entities.

mod alias;
mod user;

pub use alias::{AliasRecord, NewAlias};
pub use user::{NewUser, UserRecord};
