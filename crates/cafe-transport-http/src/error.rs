//! Error types for the HTTP transport layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use cafe_registry::RepositoryError;
use cafe_types::CafeError;

pub(crate) const ID_NOT_FOUND: &str = "Sorry, a cafe with that id was not found in the database";
pub(crate) const LOCATION_NOT_FOUND: &str = "Sorry, we don't have a cafe at that location.";
pub(crate) const EMPTY_STORE: &str = "Sorry, there are no cafes in the database.";
pub(crate) const FORBIDDEN: &str =
    "Sorry, that's not allowed. Make sure you have the correct api_key.";

/// Errors that can occur while starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// Failed to bind to the TCP address.
    #[error("failed to bind on {addr}: {source}")]
    Bind {
        /// The address string.
        addr: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP server encountered an I/O error while serving.
    #[error("server error: {0}")]
    Serve(String),
}

/// A failed request, rendered as a JSON body with a matching status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No cafe has the requested id (or the id is not a valid integer).
    #[error("cafe not found")]
    NotFound,
    /// Random pick on an empty store.
    #[error("no cafes stored")]
    EmptyStore,
    /// The `api-key` parameter did not match the shared secret.
    #[error("forbidden")]
    Forbidden,
    /// A required parameter was missing or malformed.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// The cafe name is already taken.
    #[error("conflict: {0}")]
    Conflict(String),
    /// The store failed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound { .. } => Self::NotFound,
            RepositoryError::EmptyStore => Self::EmptyStore,
            RepositoryError::Conflict { message } => Self::Conflict(message),
            RepositoryError::Storage { message } => Self::Internal(message),
        }
    }
}

impl From<CafeError> for ApiError {
    fn from(e: CafeError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // Id lookups report under "response", matching the success shape
            // of the same routes.
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                json!({"response": {"Not Found": ID_NOT_FOUND}}),
            ),
            Self::EmptyStore => (
                StatusCode::NOT_FOUND,
                json!({"error": {"Not Found": EMPTY_STORE}}),
            ),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                json!({"error": {"Forbidden": FORBIDDEN}}),
            ),
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({"error": {"Bad Request": message}}),
            ),
            Self::Conflict(message) => (
                StatusCode::CONFLICT,
                json!({"error": {"Conflict": message}}),
            ),
            Self::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": {"Internal": message}}),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_types::CafeId;

    #[test]
    fn bind_error_displays_address() {
        let err = HttpTransportError::Bind {
            addr: "127.0.0.1:5000".into(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        assert!(err.to_string().contains("127.0.0.1:5000"));
    }

    #[test]
    fn repository_errors_map_to_api_errors() {
        let id = CafeId::new(1).expect("id");
        assert!(matches!(
            ApiError::from(RepositoryError::NotFound { id }),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(RepositoryError::EmptyStore),
            ApiError::EmptyStore
        ));
        assert!(matches!(
            ApiError::from(RepositoryError::Storage {
                message: "disk full".into()
            }),
            ApiError::Internal(m) if m == "disk full"
        ));
    }

    #[test]
    fn missing_field_is_bad_request() {
        let err = ApiError::from(CafeError::MissingField("name"));
        assert!(matches!(err, ApiError::BadRequest(m) if m.contains("name")));
    }

    #[tokio::test]
    async fn internal_error_carries_message_in_body() {
        let resp = ApiError::Internal("disk I/O error".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(resp.into_body(), 1024)
            .await
            .expect("body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(body["error"]["Internal"], "disk I/O error");
    }

    #[test]
    fn statuses() {
        assert_eq!(ApiError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::EmptyStore.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Forbidden.into_response().status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::BadRequest("missing".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("dup".into()).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
