//! Liveness and scrape endpoints. Neither touches the indexer.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::AppState;

const PROMETHEUS_TEXT: &str = "text/plain; version=0.0.4";

pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

pub async fn prometheus_scrape(State(state): State<AppState>) -> impl IntoResponse {
    ([(CONTENT_TYPE, PROMETHEUS_TEXT)], state.metrics_handle.render())
}
