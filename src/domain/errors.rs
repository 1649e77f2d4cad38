//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Variants carry the offending id and entity name so the API layer can format
//! responses consistently.

use std::fmt;

use uuid::Uuid;

#[derive(Debug)]
pub enum DomainError {
    /// No record with the requested identifier exists
    NotFound { id: Uuid, entity: &'static str },
    /// A record with the same unique-field value already exists;
    /// `id` is the identifier of the conflicting record
    AlreadyExists { id: Uuid, entity: &'static str },
    /// The storage layer rejected a write that slipped past the
    /// application-level uniqueness check
    ConstraintViolation { entity: &'static str },
    /// Database/persistence error
    Database(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound { id, entity } => {
                write!(f, "{} does not exist - {}", entity, id)
            }
            DomainError::AlreadyExists { id, entity } => {
                write!(f, "{} already exists - {}", entity, id)
            }
            DomainError::ConstraintViolation { entity } => {
                write!(f, "{} violates a unique constraint", entity)
            }
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer).
// Unique-constraint rejections are mapped separately where the entity
// name is known; everything else is a plain database failure.
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
