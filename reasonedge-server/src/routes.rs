//! HTTP routes for the reasoning service.

use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use reasonedge::{Algorithm, AlgorithmInfo, Reasoner, ReasoningRequest, ReasoningResult};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub reasoner: Arc<Reasoner>,
}

impl AppState {
    pub fn new(reasoner: Reasoner) -> Self {
        Self {
            reasoner: Arc::new(reasoner),
        }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/algorithms", get(algorithms))
        .route("/reason", post(reason))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({"message": "Welcome to ReasonEdge API", "status": "healthy"}))
}

async fn algorithms() -> Json<Vec<AlgorithmInfo>> {
    Json(Algorithm::ALL.iter().map(Algorithm::info).collect())
}

async fn reason(
    State(state): State<AppState>,
    payload: Result<Json<ReasoningRequest>, JsonRejection>,
) -> Result<Json<ReasoningResult>, ApiError> {
    let Json(request) = payload?;

    tracing::info!(
        "Processing reasoning request with prompt length: {} and algorithm: {}",
        request.prompt.len(),
        request.algorithm
    );

    let result = state.reasoner.reason(request).await?;

    tracing::info!(
        "Successfully processed reasoning request in {:.3}s",
        result.execution_time
    );
    Ok(Json(result))
}
