//! HTTP API
//!
//! - `POST /api/chat`: answer one question
//! - `GET /health`: liveness plus the execution mode fixed at startup

mod chat;
mod health;

pub use chat::status_for;

use axum::Router;
use axum::routing::{get, post};
use orchestrator_application::HandleQuestionUseCase;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub use_case: Arc<HandleQuestionUseCase>,
}

impl AppState {
    pub fn new(use_case: Arc<HandleQuestionUseCase>) -> Self {
        Self { use_case }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/health", get(health::health))
        .layer(CatchPanicLayer::custom(chat::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
