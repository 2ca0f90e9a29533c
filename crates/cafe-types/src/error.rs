//! Error type for the cafe domain layer.

use std::fmt;

/// Input that cannot form a valid cafe value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CafeError {
    /// An id that is not a positive integer.
    InvalidId(String),
    /// A required text attribute was not supplied.
    MissingField(&'static str),
}

impl fmt::Display for CafeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(raw) => write!(f, "invalid cafe id: {raw}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
        }
    }
}

impl std::error::Error for CafeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_display() {
        let err = CafeError::InvalidId("abc".to_string());
        assert_eq!(err.to_string(), "invalid cafe id: abc");
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = CafeError::MissingField("map_url");
        assert_eq!(err.to_string(), "missing required field: map_url");
    }
}
