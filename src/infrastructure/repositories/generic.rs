//! Generic SeaORM repository
//!
//! One implementation of the `Repository` contract for all entities, driven
//! by an explicit per-entity `EntityMapping`. The repository borrows its
//! connection, so it can run against the pooled connection or a transaction
//! and can never outlive the session it was constructed over.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, SqlErr,
};
use uuid::Uuid;

use crate::domain::{DomainError, Repository};

/// Explicit field mapping between an entity's table and its API shapes
pub trait EntityMapping: Send + Sync {
    type Entity: EntityTrait;
    type Create: Send;
    type Update: Send;
    type Out: From<<Self::Entity as EntityTrait>::Model> + Send;
    type Filter: Sync;

    /// Entity name used in error payloads
    const ENTITY_NAME: &'static str;

    /// Build the active model for a new record, assigning its identifier
    fn new_record(input: Self::Create) -> <Self::Entity as EntityTrait>::ActiveModel;

    /// Mark only the fields present in `input` as changed
    fn apply_update(
        model: <Self::Entity as EntityTrait>::Model,
        input: Self::Update,
    ) -> <Self::Entity as EntityTrait>::ActiveModel;

    /// Condition selecting the record with the given primary key
    fn id_condition(id: Uuid) -> Condition;

    /// AND of all provided equality filters; empty filters select everything
    fn filter_condition(filter: &Self::Filter) -> Condition;
}

/// SeaORM-based implementation of the `Repository` contract
pub struct SqlRepository<'c, C, M>
where
    C: ConnectionTrait,
    M: EntityMapping,
{
    conn: &'c C,
    mapping: PhantomData<M>,
}

impl<'c, C, M> SqlRepository<'c, C, M>
where
    C: ConnectionTrait,
    M: EntityMapping,
{
    pub fn new(conn: &'c C) -> Self {
        Self {
            conn,
            mapping: PhantomData,
        }
    }

    fn storage_error(err: DbErr) -> DomainError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::ConstraintViolation {
                entity: M::ENTITY_NAME,
            },
            _ => DomainError::Database(err.to_string()),
        }
    }

    async fn find_one(
        &self,
        id: Uuid,
    ) -> Result<<M::Entity as EntityTrait>::Model, DomainError> {
        <M::Entity as EntityTrait>::find()
            .filter(M::id_condition(id))
            .one(self.conn)
            .await?
            .ok_or(DomainError::NotFound {
                id,
                entity: M::ENTITY_NAME,
            })
    }
}

#[async_trait]
impl<'c, C, M> Repository for SqlRepository<'c, C, M>
where
    C: ConnectionTrait,
    M: EntityMapping,
    <M::Entity as EntityTrait>::Model:
        IntoActiveModel<<M::Entity as EntityTrait>::ActiveModel> + Sync,
    <M::Entity as EntityTrait>::ActiveModel: ActiveModelBehavior + Send,
{
    type Create = M::Create;
    type Update = M::Update;
    type Out = M::Out;
    type Filter = M::Filter;

    async fn create(&self, input: Self::Create) -> Result<Self::Out, DomainError> {
        let entry = M::new_record(input);
        let model = entry.insert(self.conn).await.map_err(Self::storage_error)?;
        Ok(M::Out::from(model))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Self::Out, DomainError> {
        let model = self.find_one(id).await?;
        Ok(M::Out::from(model))
    }

    async fn collect(&self, filter: &Self::Filter) -> Result<Vec<Self::Out>, DomainError> {
        let models = <M::Entity as EntityTrait>::find()
            .filter(M::filter_condition(filter))
            .all(self.conn)
            .await?;
        Ok(models.into_iter().map(M::Out::from).collect())
    }

    async fn update(&self, id: Uuid, input: Self::Update) -> Result<Self::Out, DomainError> {
        let existing = self.find_one(id).await?;
        let entry = M::apply_update(existing.clone(), input);
        if !entry.is_changed() {
            return Ok(M::Out::from(existing));
        }
        let model = entry.update(self.conn).await.map_err(Self::storage_error)?;
        Ok(M::Out::from(model))
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.find_one(id).await?;
        <M::Entity as EntityTrait>::delete_many()
            .filter(M::id_condition(id))
            .exec(self.conn)
            .await?;
        Ok(())
    }
}
