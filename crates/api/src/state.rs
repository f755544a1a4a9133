//! Application state shared across handlers.

use database::Database;
use intel_engine::IntelEngine;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Incident classifier backed by the same database.
    pub intel: IntelEngine<Database>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database) -> Self {
        let intel = IntelEngine::new(db.clone());
        Self { db, intel }
    }
}
