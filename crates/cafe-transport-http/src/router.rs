//! Axum router for the cafe HTTP/JSON API.
//!
//! Routes: `/`, `/random`, `/all`, `/search`, `/add`, `/update-price/{id}`,
//! `/report-closed/{id}`, plus `/health` and `/health/ready` probes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use cafe_registry::CafeRepository;
use cafe_types::CafeId;

use crate::auth;
use crate::error::{ApiError, LOCATION_NOT_FOUND};
use crate::params::{AddCafeParams, ApiKeyParams, PriceParams, QueryArgs, SearchParams};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The cafe store.
    pub repo: Arc<dyn CafeRepository>,
    /// Shared secret required by `/report-closed/{id}`.
    pub api_key: Arc<str>,
}

impl AppState {
    /// Creates handler state from a repository and the shared secret.
    pub fn new(repo: Arc<dyn CafeRepository>, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            repo,
            api_key: api_key.into(),
        }
    }
}

/// Builds the axum `Router` with all cafe routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route("/random", get(handle_random))
        .route("/all", get(handle_all))
        .route("/search", get(handle_search))
        .route("/add", post(handle_add))
        .route("/update-price/{id}", patch(handle_update_price))
        .route("/report-closed/{id}", delete(handle_report_closed))
        .route("/health", get(handle_health))
        .route("/health/ready", get(handle_ready))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn handle_random(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let cafe = state.repo.pick_random().await?;
    Ok(Json(json!({ "cafe": cafe })))
}

async fn handle_all(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let cafes = state.repo.list_all().await?;
    Ok(Json(json!({ "cafes": cafes })))
}

/// A miss is reported in the body with status 200, unlike the id routes.
async fn handle_search(
    State(state): State<AppState>,
    args: QueryArgs,
) -> Result<Json<Value>, ApiError> {
    let params = SearchParams::from(args);
    let found = match params.loc.as_deref() {
        Some(loc) => state.repo.find_by_location(loc).await?,
        None => None,
    };
    let body = match found {
        Some(cafe) => json!({ "cafe": cafe }),
        None => json!({ "error": { "Not Found": LOCATION_NOT_FOUND } }),
    };
    Ok(Json(body))
}

async fn handle_add(
    State(state): State<AppState>,
    args: QueryArgs,
) -> Result<Json<Value>, ApiError> {
    let new_cafe = AddCafeParams::from(args).into_new_cafe()?;
    let cafe = state.repo.insert(new_cafe).await?;
    tracing::debug!(cafe_id = %cafe.id, "add request completed");
    Ok(Json(
        json!({ "response": { "success": "Successfully added the new cafe." } }),
    ))
}

async fn handle_update_price(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    args: QueryArgs,
) -> Result<Json<Value>, ApiError> {
    let params = PriceParams::from(args);
    let id = parse_id(&raw_id)?;
    state.repo.update_price(id, params.new_price).await?;
    Ok(Json(
        json!({ "response": { "success": "Successfully updated coffee price." } }),
    ))
}

async fn handle_report_closed(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    args: QueryArgs,
) -> Result<Json<Value>, ApiError> {
    let params = ApiKeyParams::from(args);
    if auth::validate_api_key(params.api_key.as_deref(), &state.api_key).is_err() {
        tracing::warn!(cafe_id = %raw_id, "delete rejected: api key mismatch");
        return Err(ApiError::Forbidden);
    }
    let id = parse_id(&raw_id)?;
    state.repo.delete(id).await?;
    Ok(Json(
        json!({ "response": { "success": "Successfully deleted the cafe." } }),
    ))
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "cafe"}))
}

/// Readiness probe: `200 OK` once the store answers a trivial query.
async fn handle_ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.repo.count().await {
        Ok(n) => (
            StatusCode::OK,
            Json(json!({"status": "ready", "service": "cafe", "cafes": n})),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "unavailable", "service": "cafe"})),
            )
        }
    }
}

/// A path segment that is not a positive integer cannot name a stored cafe.
fn parse_id(raw: &str) -> Result<CafeId, ApiError> {
    raw.parse::<CafeId>().map_err(|_| ApiError::NotFound)
}
