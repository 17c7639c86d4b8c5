//! HTTP adapters - router assembly and operational endpoints.
//!
//! - `health` - `GET /health` with the live subscriber count
//! - `app_router` - health + WebSocket endpoint with tracing and CORS layers

pub mod health;

use axum::http::{HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::adapters::websocket::{websocket_router, WebSocketState};

pub use health::{health, HealthResponse};

/// Build the full application router.
///
/// An empty `cors_origins` list allows any origin (development default).
pub fn app_router(state: WebSocketState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(websocket_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET])
}
