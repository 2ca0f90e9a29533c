//! SQLite-backed cafe repository: connection ownership and bootstrap.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use cafe_registry::RepositoryError;

use crate::migrations::run_migrations;

/// SQLite-backed cafe repository.
///
/// Holds one connection for the lifetime of the process; every call locks
/// it for the duration of its statements.
pub struct SqliteCafeRepository {
    conn: Mutex<rusqlite::Connection>,
}

impl SqliteCafeRepository {
    /// Opens or creates a SQLite database at the given path and ensures the
    /// schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let conn = rusqlite::Connection::open(path).map_err(|e| RepositoryError::Storage {
            message: format!("cannot open {}: {e}", path.display()),
        })?;
        run_migrations(&conn)?;
        tracing::info!(path = %path.display(), "cafe store opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens a fresh in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        let conn = rusqlite::Connection::open_in_memory().map_err(|e| {
            RepositoryError::Storage {
                message: e.to_string(),
            }
        })?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub(crate) fn lock_conn(&self) -> Result<MutexGuard<'_, rusqlite::Connection>, RepositoryError> {
        self.conn.lock().map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })
    }
}
