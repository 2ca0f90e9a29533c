//! Database schema bootstrap for the cafe store.

use cafe_registry::RepositoryError;
use rusqlite::Connection;

/// Current schema version.
const SCHEMA_VERSION: u32 = 1;

/// Runs all pending migrations on the database.
pub fn run_migrations(conn: &Connection) -> Result<(), RepositoryError> {
    let current = get_schema_version(conn)?;

    if current < 1 {
        migrate_v1(conn)?;
        tracing::debug!(version = 1, "applied cafe schema migration");
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}

/// Creates the initial schema (v1).
fn migrate_v1(conn: &Connection) -> Result<(), RepositoryError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS cafe (
            id             INTEGER PRIMARY KEY,
            name           VARCHAR(250) NOT NULL UNIQUE,
            map_url        VARCHAR(500) NOT NULL,
            img_url        VARCHAR(500) NOT NULL,
            location       VARCHAR(250) NOT NULL,
            seats          VARCHAR(250) NOT NULL,
            has_toilet     BOOLEAN NOT NULL,
            has_wifi       BOOLEAN NOT NULL,
            has_sockets    BOOLEAN NOT NULL,
            can_take_calls BOOLEAN NOT NULL,
            coffee_price   VARCHAR(250)
        );

        CREATE INDEX IF NOT EXISTS idx_cafe_location ON cafe(location);",
    )
    .map_err(|e| RepositoryError::Storage {
        message: format!("migration v1 failed: {e}"),
    })
}

/// Reads the current schema version from PRAGMA user_version.
fn get_schema_version(conn: &Connection) -> Result<u32, RepositoryError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to read schema version: {e}"),
        })
}

/// Sets the schema version via PRAGMA user_version.
fn set_schema_version(conn: &Connection, version: u32) -> Result<(), RepositoryError> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to set schema version: {e}"),
        })
}
