//! SQL query builder for `find_all` operations.

use cafe_registry::CafeQuery;

use crate::repository_impl::COLS;

/// Builds the SQL and parameters for `find_all`.
pub(crate) fn build_find_all_query(
    query: &CafeQuery,
) -> (String, Vec<Box<dyn rusqlite::types::ToSql>>) {
    let mut sql = format!("SELECT {COLS} FROM cafe WHERE 1=1");
    let mut params: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();
    if let Some(ref location) = query.location {
        sql.push_str(" AND location = ?");
        params.push(Box::new(location.clone()));
    }
    sql.push_str(" ORDER BY id ASC");
    if let Some(limit) = query.limit {
        sql.push_str(" LIMIT ?");
        params.push(Box::new(i64::from(limit)));
    }
    (sql, params)
}
