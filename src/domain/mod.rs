//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only trait definitions, data-transfer shapes and domain error types.

pub mod errors;
pub mod events;
pub mod mob;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::Repository;
