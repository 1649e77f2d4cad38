//! Mob Service - Pure business logic without HTTP layer
//!
//! Enforces the cross-record invariants the storage layer cannot express
//! alone (the pre-commit name-uniqueness check) and publishes domain events
//! strictly after commit.
//!
//! The uniqueness pre-check is advisory: two concurrent creates can both
//! pass it and race at the unique index, in which case exactly one insert
//! succeeds and the loser surfaces `ConstraintViolation`. No retries.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::domain::events::{EventBus, MobEvent};
use crate::domain::mob::{CreateMob, Mob, MobFilter, UpdateMob};
use crate::domain::{DomainError, Repository};
use crate::infrastructure::repositories::{EntityMapping, MobMapping, MobRepository};
use crate::infrastructure::transaction::UnitOfWork;

#[derive(Clone)]
pub struct MobService {
    db: DatabaseConnection,
    events: Arc<dyn EventBus>,
}

impl MobService {
    pub fn new(db: DatabaseConnection, events: Arc<dyn EventBus>) -> Self {
        Self { db, events }
    }

    /// Create a new mob, rejecting duplicate names before the write.
    ///
    /// The early return on a duplicate drops the unit of work, so nothing
    /// is ever partially written.
    pub async fn create(&self, input: CreateMob) -> Result<Mob, DomainError> {
        tracing::info!(name = %input.name, "creating mob");

        let uow = UnitOfWork::begin(&self.db).await?;
        let repo = uow.repository::<MobMapping>();

        let filter = MobFilter {
            name: Some(input.name.clone()),
            ..Default::default()
        };
        if let Some(existing) = repo.collect(&filter).await?.into_iter().next() {
            return Err(DomainError::AlreadyExists {
                id: existing.id,
                entity: MobMapping::ENTITY_NAME,
            });
        }

        let mob = repo.create(input).await?;
        uow.commit().await?;

        self.publish(MobEvent::MonsterCreated(mob.clone())).await;
        tracing::info!(id = %mob.id, "created mob");
        Ok(mob)
    }

    /// Get a mob by its primary key
    pub async fn get(&self, id: Uuid) -> Result<Mob, DomainError> {
        MobRepository::new(&self.db).get_by_id(id).await
    }

    /// Get all mobs matching the filters
    pub async fn get_all(&self, filter: MobFilter) -> Result<Vec<Mob>, DomainError> {
        MobRepository::new(&self.db).collect(&filter).await
    }

    /// Apply a partial update, re-validating name uniqueness when the name
    /// changes. Updating a mob's name to its own current value is allowed.
    pub async fn update(&self, id: Uuid, input: UpdateMob) -> Result<Mob, DomainError> {
        tracing::info!(%id, "updating mob");

        let uow = UnitOfWork::begin(&self.db).await?;
        let repo = uow.repository::<MobMapping>();

        if let Some(name) = &input.name {
            let filter = MobFilter {
                name: Some(name.clone()),
                ..Default::default()
            };
            if let Some(existing) = repo.collect(&filter).await?.into_iter().next() {
                if existing.id != id {
                    return Err(DomainError::AlreadyExists {
                        id: existing.id,
                        entity: MobMapping::ENTITY_NAME,
                    });
                }
            }
        }

        let mob = repo.update(id, input).await?;
        uow.commit().await?;

        tracing::info!(id = %mob.id, "updated mob");
        Ok(mob)
    }

    /// Delete a mob by its primary key
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        tracing::info!(%id, "deleting mob");

        let uow = UnitOfWork::begin(&self.db).await?;
        let repo = uow.repository::<MobMapping>();
        repo.delete(id).await?;
        uow.commit().await?;

        self.publish(MobEvent::MonsterDeleted { id }).await;
        tracing::info!(%id, "deleted mob");
        Ok(())
    }

    // Fire-and-forget: the mutation is already committed, so a publish
    // failure is logged and swallowed.
    async fn publish(&self, event: MobEvent) {
        if let Err(err) = self.events.publish(event).await {
            tracing::warn!(error = %err, "failed to publish domain event");
        }
    }
}
