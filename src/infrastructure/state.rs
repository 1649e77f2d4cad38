//! Application state containing services and shared resources

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::events::{EventBus, TracingEventBus};
use crate::services::MobService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Mob service
    pub mobs: MobService,
}

impl AppState {
    /// Create a new AppState with the default logging event bus
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_event_bus(db, Arc::new(TracingEventBus))
    }

    /// Create a new AppState with an injected event bus
    pub fn with_event_bus(db: DatabaseConnection, events: Arc<dyn EventBus>) -> Self {
        Self {
            mobs: MobService::new(db, events),
        }
    }
}
