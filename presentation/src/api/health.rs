//! Health check endpoint

use super::AppState;
use axum::Json;
use axum::extract::State;
use orchestrator_domain::ExecutionMode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub mode: ExecutionMode,
}

pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        mode: state.use_case.mode(),
    })
}
