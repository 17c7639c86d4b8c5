//! Liveness endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::adapters::websocket::WebSocketState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub subscribers: usize,
}

/// Route: `GET /health`
pub async fn health(State(state): State<WebSocketState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        subscribers: state.gateway.registry().subscriber_count().await,
    })
}
