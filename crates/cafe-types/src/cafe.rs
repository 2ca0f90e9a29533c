//! Cafe identity and record types.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CafeError;

/// Store-assigned identifier of a cafe row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CafeId(i64);

impl CafeId {
    /// Creates a new `CafeId`, rejecting non-positive values.
    pub fn new(id: i64) -> Result<Self, CafeError> {
        if id < 1 {
            return Err(CafeError::InvalidId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// Returns the raw integer id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CafeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CafeId {
    type Err = CafeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<i64>()
            .map_err(|_| CafeError::InvalidId(s.to_string()))?;
        Self::new(raw)
    }
}

/// Attributes of a cafe that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// A stored cafe.
///
/// Serializes as a flat object of column name to value, which is the wire
/// shape of every record the HTTP layer returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cafe {
    /// Assigned on insert, never changes.
    pub id: CafeId,
    /// Unique across all cafes.
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// The only attribute updated in place.
    pub coffee_price: Option<String>,
}

impl Cafe {
    /// Combines a freshly assigned id with the inserted attributes.
    pub fn from_new(id: CafeId, new: NewCafe) -> Self {
        Self {
            id,
            name: new.name,
            map_url: new.map_url,
            img_url: new.img_url,
            location: new.location,
            seats: new.seats,
            has_toilet: new.has_toilet,
            has_wifi: new.has_wifi,
            has_sockets: new.has_sockets,
            can_take_calls: new.can_take_calls,
            coffee_price: new.coffee_price,
        }
    }
}
