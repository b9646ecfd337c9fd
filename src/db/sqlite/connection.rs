//! SQLite connection pool and schema management.

use std::path::Path;
use std::str::FromStr;

use sqlx::{Executor, SqlitePool};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use super::SqlitePatientRepository;
use crate::db::{Database, StorageError, StorageResult};

// Schema from data/sql/sqlite/, embedded at compile time
const SCHEMA: &str = include_str!("../../../data/sql/sqlite/schema.sql");

const MAX_CONNECTIONS: u32 = 5;

/// SQLite database implementation.
///
/// Every operation checks a connection out of the pool for its own duration
/// only; the connection goes back to the pool when the operation returns,
/// whether it succeeded or not.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open a database at the given path, creating the file if missing.
    pub async fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Connection {
                message: e.to_string(),
            })?;

        debug!(path = %path.as_ref().display(), "Opened SQLite pool");
        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// The pool holds exactly one connection that is never recycled, since
    /// each SQLite in-memory connection is a separate database.
    pub async fn in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| {
            StorageError::Connection {
                message: e.to_string(),
            }
        })?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Direct access to the pool for tests and tooling.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Patients<'a> = SqlitePatientRepository<'a>;

    async fn ensure_schema(&self) -> StorageResult<()> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| StorageError::Connection {
                message: e.to_string(),
            })?;

        conn.execute(sqlx::raw_sql(SCHEMA))
            .await
            .map_err(|e| StorageError::Schema {
                message: e.to_string(),
            })?;

        debug!("Patient schema ready");
        Ok(())
    }

    fn patients(&self) -> Self::Patients<'_> {
        SqlitePatientRepository { pool: &self.pool }
    }
}
