//! Shared application state.
//!
//! Holds the database location; every command opens its own short-lived
//! connection from here, so repositories never see a global store handle.

use std::path::PathBuf;

use rusqlite::Connection;

use crate::config;
use crate::db::{self, DatabaseError};

pub struct AppState {
    db_path: PathBuf,
}

impl AppState {
    /// State pointing at the default database location.
    pub fn new() -> Self {
        Self {
            db_path: config::database_path(),
        }
    }

    /// State pointing at an explicit database file (used by tests).
    pub fn with_db_path(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Open a connection, creating the data directory and schema on first
    /// use.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::ConstraintViolation(format!(
                    "cannot create data directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        db::open_database(&self.db_path)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
