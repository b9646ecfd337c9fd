//! Storage error types.
//!
//! Storage failures are infrastructure errors: they are never recovered
//! inside a request and surface to the caller unchanged.

use miette::Diagnostic;
use thiserror::Error;

/// Patient store errors.
#[derive(Error, Diagnostic, Debug)]
pub enum StorageError {
    #[error("Connection error: {message}")]
    #[diagnostic(
        code(intake::db::connection_error),
        help("Check that the database file is reachable and writable")
    )]
    Connection { message: String },

    #[error("Schema error: {message}")]
    #[diagnostic(code(intake::db::schema_error))]
    Schema { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(intake::db::database_error))]
    Database { message: String },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
