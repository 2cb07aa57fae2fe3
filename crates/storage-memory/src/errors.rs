//! Storage-specific error types for in-memory operations.
//!
//! These errors never leave the crate: they are converted to
//! `stockfolio_core::Error` before being returned to callers.

use stockfolio_core::errors::{DatabaseError, Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// A writer panicked while holding the table lock.
    #[error("Table lock poisoned during {0}")]
    LockPoisoned(&'static str),

    #[error("{table} record {id} not found")]
    NotFound { table: &'static str, id: String },

    #[error("{table} record {id} already exists")]
    Duplicate { table: &'static str, id: String },

    #[error("{table} record references missing {referenced} {id}")]
    MissingReference {
        table: &'static str,
        referenced: &'static str,
        id: String,
    },
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        let message = err.to_string();
        match err {
            StorageError::LockPoisoned(_) => Error::Database(DatabaseError::Internal(message)),
            StorageError::NotFound { .. } => Error::Database(DatabaseError::NotFound(message)),
            StorageError::Duplicate { .. } => {
                Error::Database(DatabaseError::UniqueViolation(message))
            }
            StorageError::MissingReference { .. } => {
                Error::Database(DatabaseError::ForeignKeyViolation(message))
            }
        }
    }
}
