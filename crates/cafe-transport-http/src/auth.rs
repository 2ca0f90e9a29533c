//! Shared-secret check for destructive routes.

use axum::http::StatusCode;

/// Validates the `api-key` query parameter against the configured secret.
///
/// The comparison is a literal string match; nothing is hashed or trimmed.
///
/// # Errors
///
/// Returns `StatusCode::FORBIDDEN` if the key is absent or does not match
/// `expected`.
pub(crate) fn validate_api_key(provided: Option<&str>, expected: &str) -> Result<(), StatusCode> {
    if provided == Some(expected) {
        Ok(())
    } else {
        Err(StatusCode::FORBIDDEN)
    }
}
