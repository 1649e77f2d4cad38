//! Repository trait definition
//!
//! This trait defines the contract for data access: create/read/list/update/
//! delete for one entity type, generic over its input and output shapes.
//! Implementations live in the infrastructure layer and never manage
//! transaction boundaries themselves; the unit of work owns commit/rollback.

use async_trait::async_trait;
use uuid::Uuid;

use super::DomainError;

/// Storage abstraction for a single entity type
#[async_trait]
pub trait Repository: Send + Sync {
    /// Input shape for `create`
    type Create: Send;
    /// Partial input shape for `update`
    type Update: Send;
    /// Canonical output representation, always including the identifier
    type Out: Send;
    /// Conjunctive equality filters for `collect`
    type Filter: Sync;

    /// Persist a new entry, assigning its identifier.
    ///
    /// Surfaces `ConstraintViolation` when the unique-field invariant is
    /// violated at the storage layer; callers are expected to pre-check,
    /// this is the backstop.
    async fn create(&self, input: Self::Create) -> Result<Self::Out, DomainError>;

    /// Get an entry by its id, or `NotFound`.
    async fn get_by_id(&self, id: Uuid) -> Result<Self::Out, DomainError>;

    /// Collect all entries matching the filters, in storage-native order.
    async fn collect(&self, filter: &Self::Filter) -> Result<Vec<Self::Out>, DomainError>;

    /// Apply the fields present in `input` to an existing entry.
    ///
    /// Fails with `NotFound` when the id is absent and `ConstraintViolation`
    /// when the update would break the unique-field invariant.
    async fn update(&self, id: Uuid, input: Self::Update) -> Result<Self::Out, DomainError>;

    /// Delete an entry by its id, or `NotFound`. Existence is checked first
    /// so a delete of nothing is distinguishable.
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}
