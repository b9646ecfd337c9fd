//! SQLite implementation of the database traits.
//!
//! This module provides a sqlx-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod patient;


pub use connection::SqliteDatabase;
pub use patient::SqlitePatientRepository;
