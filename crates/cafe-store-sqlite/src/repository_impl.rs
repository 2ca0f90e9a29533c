//! `CafeRepository` trait implementation for `SqliteCafeRepository`.

use async_trait::async_trait;
use cafe_registry::{CafeQuery, CafeRepository, RepositoryError};
use cafe_types::{Cafe, CafeId, NewCafe};
use rand::Rng;
use rusqlite::{params, Connection};

use crate::query_builder::build_find_all_query;
use crate::repository::SqliteCafeRepository;
use crate::row_mapping::{row_to_cafe, OptionalExt};

/// Column list shared across all SELECT queries.
pub(crate) const COLS: &str = "\
    id, name, map_url, img_url, location, seats, \
    has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

/// Maps a `rusqlite::Error` to a `RepositoryError::Storage`.
fn map_sqlite_err(e: rusqlite::Error) -> RepositoryError {
    RepositoryError::Storage {
        message: e.to_string(),
    }
}

fn select_by_id(conn: &Connection, id: CafeId) -> Result<Option<Cafe>, RepositoryError> {
    let sql = format!("SELECT {COLS} FROM cafe WHERE id = ?1");
    let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
    stmt.query_row(params![id.get()], row_to_cafe)
        .optional()
        .map_err(map_sqlite_err)
}

fn count_rows(conn: &Connection) -> Result<u64, RepositoryError> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM cafe", [], |row| row.get(0))
        .map_err(map_sqlite_err)?;
    Ok(n.max(0) as u64)
}

#[async_trait]
impl CafeRepository for SqliteCafeRepository {
    async fn find_by_id(&self, id: CafeId) -> Result<Option<Cafe>, RepositoryError> {
        let conn = self.lock_conn()?;
        select_by_id(&conn, id)
    }

    async fn find_all(&self, query: CafeQuery) -> Result<Vec<Cafe>, RepositoryError> {
        let conn = self.lock_conn()?;
        let (sql, param_values) = build_find_all_query(&query);
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let cafes = stmt
            .query_map(params_refs.as_slice(), row_to_cafe)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        tracing::debug!(count = cafes.len(), ?query, "cafes fetched");
        Ok(cafes)
    }

    async fn pick_random(&self) -> Result<Cafe, RepositoryError> {
        let conn = self.lock_conn()?;
        let total = count_rows(&conn)?;
        if total == 0 {
            return Err(RepositoryError::EmptyStore);
        }
        let offset = rand::thread_rng().gen_range(0..total) as i64;
        let sql = format!("SELECT {COLS} FROM cafe ORDER BY id ASC LIMIT 1 OFFSET ?1");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        stmt.query_row(params![offset], row_to_cafe)
            .map_err(map_sqlite_err)
    }

    async fn insert(&self, cafe: NewCafe) -> Result<Cafe, RepositoryError> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO cafe (name, map_url, img_url, location, seats, \
             has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                cafe.name,
                cafe.map_url,
                cafe.img_url,
                cafe.location,
                cafe.seats,
                cafe.has_toilet,
                cafe.has_wifi,
                cafe.has_sockets,
                cafe.can_take_calls,
                cafe.coffee_price,
            ],
        )
        .map_err(|e| {
            if let rusqlite::Error::SqliteFailure(ref err, _) = e {
                if err.code == rusqlite::ErrorCode::ConstraintViolation {
                    return RepositoryError::Conflict {
                        message: format!("a cafe named '{}' already exists", cafe.name),
                    };
                }
            }
            map_sqlite_err(e)
        })?;
        let id = CafeId::new(conn.last_insert_rowid()).map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })?;
        tracing::info!(cafe_id = %id, name = %cafe.name, "cafe added");
        Ok(Cafe::from_new(id, cafe))
    }

    async fn update_price(
        &self,
        id: CafeId,
        new_price: Option<String>,
    ) -> Result<Cafe, RepositoryError> {
        let conn = self.lock_conn()?;
        let affected = conn
            .execute(
                "UPDATE cafe SET coffee_price = ?2 WHERE id = ?1",
                params![id.get(), new_price],
            )
            .map_err(map_sqlite_err)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound { id });
        }
        tracing::info!(cafe_id = %id, price = ?new_price, "coffee price updated");
        select_by_id(&conn, id)?.ok_or(RepositoryError::NotFound { id })
    }

    async fn delete(&self, id: CafeId) -> Result<(), RepositoryError> {
        let conn = self.lock_conn()?;
        let affected = conn
            .execute("DELETE FROM cafe WHERE id = ?1", params![id.get()])
            .map_err(map_sqlite_err)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound { id });
        }
        tracing::info!(cafe_id = %id, "cafe deleted");
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let conn = self.lock_conn()?;
        count_rows(&conn)
    }
}
