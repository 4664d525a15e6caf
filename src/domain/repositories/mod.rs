//! Repository traits decoupling the domain from the storage engine.

mod alias_repository;
mod user_repository;

pub use alias_repository::AliasRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use alias_repository::MockAliasRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
