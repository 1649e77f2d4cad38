//! Services Layer
//!
//! Pure business logic called from the Axum handlers.

pub mod mob_service;

pub use mob_service::MobService;
