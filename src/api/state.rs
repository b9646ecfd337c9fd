//! Application state for the intake server.

use std::sync::Arc;

use super::Views;
use crate::db::Database;

/// Shared application state.
///
/// Generic over `D: Database` so tests and production can use different
/// stores. Dependencies are injected via the constructor.
pub struct AppState<D: Database> {
    db: Arc<D>,
    views: Arc<Views>,
}

// Manual Clone impl - only the Arcs are cloned, D need not be Clone
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            views: Arc::clone(&self.views),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState with the given store and compiled views.
    pub fn new(db: D, views: Views) -> Self {
        Self {
            db: Arc::new(db),
            views: Arc::new(views),
        }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get a cloned Arc to the database.
    #[cfg(test)]
    pub(crate) fn db_arc(&self) -> Arc<D> {
        Arc::clone(&self.db)
    }

    /// Get a reference to the page templates.
    pub fn views(&self) -> &Views {
        &self.views
    }
}
