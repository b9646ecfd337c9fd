//! SQLite PatientRepository implementation.

use sqlx::SqlitePool;

use crate::db::{NewPatient, Patient, PatientRepository, StorageError, StorageResult};

/// SQLx-backed patient repository.
pub struct SqlitePatientRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> PatientRepository for SqlitePatientRepository<'a> {
    async fn insert(&self, patient: &NewPatient) -> StorageResult<Patient> {
        // Dropping the transaction on an early return rolls it back and
        // releases the connection
        let mut tx = self.pool.begin().await.map_err(|e| StorageError::Connection {
            message: format!("Failed to begin transaction: {}", e),
        })?;

        let result = sqlx::query(
            "INSERT INTO patients (first_name, last_name, dob, therapist) VALUES (?, ?, ?, ?)",
        )
        .bind(&patient.first_name)
        .bind(&patient.last_name)
        .bind(patient.dob_iso())
        .bind(&patient.therapist)
        .execute(&mut *tx)
        .await
        .map_err(|e| StorageError::Database {
            message: e.to_string(),
        })?;

        let id = result.last_insert_rowid();

        tx.commit().await.map_err(|e| StorageError::Database {
            message: format!("Failed to commit: {}", e),
        })?;

        Ok(Patient::from_new(id, patient))
    }
}
