//! Repository functions for the domain layer.

pub mod aircraft;
pub mod airlines;
pub mod flights;
pub mod projections;
pub mod reports;

use crate::errors::domain::{ConflictKind, DomainError};

/// A delete blocked by a foreign key means the row still has dependents.
/// SQLite reports this with the same message as a dangling insert, so the
/// distinction is made here where the operation is known.
pub(crate) fn delete_err(err: sea_orm::DbErr) -> DomainError {
    match DomainError::from(err) {
        DomainError::Referential(_, _) => DomainError::conflict(
            ConflictKind::HasDependents,
            "Record is still referenced by other records",
        ),
        other => other,
    }
}
