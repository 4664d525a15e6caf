//! Application layer: business logic built on the repository traits.

pub mod services;
