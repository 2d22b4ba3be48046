use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use plv_resolver::{BatchOutcome, ResolveError};
use plv_types::{HistoryRecord, ObjectId, StateDocument};

use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::{self, BatchRequest};

#[derive(Debug, Deserialize)]
pub struct ObjectQuery {
    pub timestamp: Option<String>,
}

/// `GET /api/v1/objects/:object_id` — resolve one object, current or as-of.
pub async fn get_object(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(query): Query<ObjectQuery>,
) -> Result<Json<StateDocument>, ApiError> {
    let id = validation::parse_object_id(&raw_id)?;
    let at = validation::parse_timestamp(query.timestamp.as_deref())?;

    let resolution = state.resolver.resolve(&id, at)?;
    Ok(Json(resolution.document))
}

/// `POST /api/v1/objects/batch` — resolve up to 50 objects in one call.
pub async fn get_objects_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchOutcome>, ApiError> {
    let (ids, at) = validation::parse_batch(&request)?;
    let outcome = state.aggregator.resolve_batch(&ids, at)?;
    Ok(Json(outcome))
}

/// Full snapshot trail of one object, newest first.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub object_id: ObjectId,
    pub count: usize,
    pub history: Vec<HistoryRecord>,
}

/// `GET /api/v1/objects/:object_id/history` — diagnostics/export surface.
pub async fn get_object_history(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let id = validation::parse_object_id(&raw_id)?;

    state
        .entities
        .get_object(&id)
        .map_err(ResolveError::from)?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;

    let history = state
        .history
        .find_all_for_object(&id)
        .map_err(ResolveError::from)?;

    Ok(Json(HistoryResponse {
        object_id: id,
        count: history.len(),
        history,
    }))
}

#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub service: &'static str,
    pub store: StoreHealth,
}

/// `GET /api/v1/health` — store probe plus service identification.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let probe = state.entities.ping();
    let healthy = probe.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        service: "Productline View API",
        store: StoreHealth {
            status: if healthy { "connected" } else { "disconnected" },
            message: probe.err().map(|err| err.to_string()),
        },
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}

/// `GET /api/v1/health/ready` — readiness probe for orchestration.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    match state.entities.ping() {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({"status": "ready"}))),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({"status": "not ready", "message": err.to_string()})),
        ),
    }
}

/// `GET /api/v1/health/live` — liveness probe; succeeds while the process
/// is serving at all.
pub async fn live() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "alive"}))
}
