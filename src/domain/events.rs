//! Domain events going to the outside world
//!
//! The bus is an injected dependency so services stay unit-testable without
//! a real broker. Delivery is at-most-once, in-process and fire-and-forget:
//! a publish failure never rolls back the already-committed transaction.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::mob::Mob;

/// Events published after a committed mutation
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MobEvent {
    MonsterCreated(Mob),
    MonsterDeleted { id: Uuid },
}

#[derive(Debug)]
pub struct PublishError(pub String);

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event publish failed: {}", self.0)
    }
}

impl std::error::Error for PublishError {}

/// In-process publish hook, invoked only after a successful commit
#[async_trait]
pub trait EventBus: Send + Sync {
    async fn publish(&self, event: MobEvent) -> Result<(), PublishError>;
}

/// Default bus that emits events to the log
pub struct TracingEventBus;

#[async_trait]
impl EventBus for TracingEventBus {
    async fn publish(&self, event: MobEvent) -> Result<(), PublishError> {
        let payload =
            serde_json::to_value(&event).map_err(|e| PublishError(e.to_string()))?;
        tracing::info!(%payload, "publishing domain event");
        Ok(())
    }
}
