//! Request/response DTOs.

pub mod register;
pub mod save;
