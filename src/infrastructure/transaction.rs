//! Scoped unit of work over a database transaction
//!
//! The wrapper owns the underlying session for its whole lifetime.
//! `commit` consumes the unit of work and is the only path to durability;
//! dropping it without committing rolls the transaction back. Use after
//! commit/rollback cannot compile, which stands in for a runtime
//! Open -> {Committed, RolledBack} -> Closed state machine.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::domain::DomainError;

use super::repositories::{EntityMapping, SqlRepository};

pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    /// Open a transaction on the given connection
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DomainError> {
        let txn = db.begin().await?;
        Ok(Self { txn })
    }

    /// Repository bound to this transaction; it borrows the session and
    /// cannot outlive the unit of work
    pub fn repository<M: EntityMapping>(&self) -> SqlRepository<'_, DatabaseTransaction, M> {
        SqlRepository::new(&self.txn)
    }

    /// Make the preceding writes durable
    pub async fn commit(self) -> Result<(), DomainError> {
        self.txn.commit().await.map_err(DomainError::from)
    }

    /// Explicitly discard the preceding writes; dropping without commit
    /// has the same effect
    pub async fn rollback(self) -> Result<(), DomainError> {
        self.txn.rollback().await.map_err(DomainError::from)
    }
}
