//! Boolean coercion for amenity flags supplied as request parameters.

/// Interprets an optional parameter value as an amenity flag.
///
/// The flag is `true` whenever the parameter is present with a non-empty
/// value, and `false` when it is absent or empty. The text is NOT parsed:
/// `"false"`, `"0"` and `"no"` all yield `true`. Clients that want a flag
/// off must omit the parameter.
pub fn presence_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
