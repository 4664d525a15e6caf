//! Application services orchestrating domain operations.

mod alias_service;
mod auth_service;

pub use alias_service::AliasService;
pub use auth_service::AuthService;
