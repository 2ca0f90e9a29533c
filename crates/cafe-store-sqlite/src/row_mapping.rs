//! Row-to-domain mapping for the SQLite cafe repository.

use cafe_types::{Cafe, CafeId};

/// Maps a SQLite row (selected with `COLS`) to a `Cafe`.
pub(crate) fn row_to_cafe(row: &rusqlite::Row<'_>) -> rusqlite::Result<Cafe> {
    let raw_id: i64 = row.get(0)?;
    let id = CafeId::new(raw_id).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Integer, Box::new(e))
    })?;

    Ok(Cafe {
        id,
        name: row.get(1)?,
        map_url: row.get(2)?,
        img_url: row.get(3)?,
        location: row.get(4)?,
        seats: row.get(5)?,
        has_toilet: row.get(6)?,
        has_wifi: row.get(7)?,
        has_sockets: row.get(8)?,
        can_take_calls: row.get(9)?,
        coffee_price: row.get(10)?,
    })
}

/// Extension trait for optional query results.
pub(crate) trait OptionalExt<T> {
    /// Converts a "no rows" error into `Ok(None)`.
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
