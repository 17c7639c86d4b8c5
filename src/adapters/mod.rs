//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `registry` - In-memory connection registry with bounded-time fan-out
//! - `websocket` - Subscriber transport over axum WebSockets
//! - `http` - Router assembly and the health endpoint

pub mod http;
pub mod registry;
pub mod websocket;

pub use http::app_router;
pub use registry::InMemoryConnectionRegistry;
pub use websocket::{ChannelConnection, WebSocketState};
