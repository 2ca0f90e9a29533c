//! Query types for cafe repository lookups.

use serde::{Deserialize, Serialize};

/// Filtering for cafe queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeQuery {
    /// Exact, case-sensitive location match.
    pub location: Option<String>,
    /// Maximum results to return.
    pub limit: Option<u32>,
}

impl CafeQuery {
    /// Creates a query that matches all cafes.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts results to cafes at exactly `location`.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_no_filters() {
        let q = CafeQuery::all();
        assert!(q.location.is_none());
        assert!(q.limit.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let q = CafeQuery::all().with_location("Peckham").with_limit(1);
        assert_eq!(q.location.as_deref(), Some("Peckham"));
        assert_eq!(q.limit, Some(1));
    }
}
