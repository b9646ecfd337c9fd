//! Patient store abstraction.
//!
//! Handlers depend on the [`Database`] trait only; the SQLite backend lives in
//! [`sqlite`] and is chosen by the binary at startup.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Patient records
//! - `repository`: Trait definitions for data access
//! - `sqlite`: sqlx-backed implementation

mod error;
mod models;
mod repository;
pub mod sqlite;


pub use error::{StorageError, StorageResult};
pub use models::{DOB_FORMAT, NewPatient, Patient};
pub use repository::{Database, PatientRepository};
pub use sqlite::SqliteDatabase;
