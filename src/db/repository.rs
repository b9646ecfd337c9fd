//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the request handlers.

use std::future::Future;

use crate::db::{NewPatient, Patient, StorageResult};

/// Repository for patient records.
///
/// Records are append-only: there is no update or delete.
pub trait PatientRepository {
    /// Append a new patient and return it with its assigned id.
    ///
    /// Either the whole row is written or nothing is.
    fn insert(
        &self,
        patient: &NewPatient,
    ) -> impl Future<Output = StorageResult<Patient>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Patients<'a>: PatientRepository + Send + Sync
    where
        Self: 'a;

    /// Create the patient table if it does not exist yet.
    fn ensure_schema(&self) -> impl Future<Output = StorageResult<()>> + Send;

    /// Get the patient repository.
    fn patients(&self) -> Self::Patients<'_>;
}
