//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Database connection and migrations (db)
//! - Repository implementations (repositories)
//! - HTTP server setup (server)
//! - Application state (state)
//! - Unit of work (transaction)

pub mod config;
pub mod db;
pub mod repositories;
pub mod server;
pub mod state;
pub mod transaction;

pub use repositories::*;
pub use state::AppState;
pub use transaction::UnitOfWork;
