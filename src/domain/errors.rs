//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Integrity rules live in the store; the variants below only classify what
//! the store reported.

use std::fmt;

use sea_orm::{DbErr, RuntimeErr};
use sqlx::error::ErrorKind;

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found
    NotFound,
    /// A `Books.AuthorId` that does not reference an existing author
    ForeignKeyViolation(String),
    /// NOT NULL, CHECK or UNIQUE constraint rejected by the store
    ConstraintViolation(String),
    /// Database/persistence error
    Database(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::ForeignKeyViolation(msg) => {
                write!(f, "Foreign key violation: {}", msg)
            }
            DomainError::ConstraintViolation(msg) => {
                write!(f, "Constraint violation: {}", msg)
            }
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

/// Pull the driver-level constraint classification out of a SeaORM error.
fn constraint_kind(err: &DbErr) -> Option<(ErrorKind, String)> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db_err))) => {
            Some((db_err.kind(), db_err.message().to_string()))
        }
        _ => None,
    }
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        if matches!(e, DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated) {
            return DomainError::NotFound;
        }

        match constraint_kind(&e) {
            Some((ErrorKind::ForeignKeyViolation, msg)) => DomainError::ForeignKeyViolation(msg),
            Some((
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation | ErrorKind::UniqueViolation,
                msg,
            )) => DomainError::ConstraintViolation(msg),
            _ => DomainError::Database(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = DomainError::from(DbErr::RecordNotFound("Author".to_string()));
        assert!(matches!(err, DomainError::NotFound));

        let err = DomainError::from(DbErr::RecordNotUpdated);
        assert!(matches!(err, DomainError::NotFound));
    }

    #[test]
    fn unclassified_errors_stay_database_errors() {
        let err = DomainError::from(DbErr::Custom("boom".to_string()));
        match err {
            DomainError::Database(msg) => assert!(msg.contains("boom")),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn display_prefixes_variant() {
        assert_eq!(DomainError::NotFound.to_string(), "Resource not found");
        assert_eq!(
            DomainError::ForeignKeyViolation("FOREIGN KEY constraint failed".into()).to_string(),
            "Foreign key violation: FOREIGN KEY constraint failed"
        );
    }
}
