//! WebSocket adapters for real-time alarm delivery.
//!
//! This module provides the transport that pushes relayed alarm events
//! to connected dashboards and operators.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          AlarmGateway                                │
//! │   - Validates inbound envelopes against their event schema           │
//! │   - Broadcasts canonical envelopes through the registry              │
//! └─────────────────────────────────────────────────────────────────────┘
//!                                     │
//!                                     │ broadcast
//!                                     ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   InMemoryConnectionRegistry                         │
//! │   sub-1 ── ChannelConnection ── queue ── send task ── socket         │
//! │   sub-2 ── ChannelConnection ── queue ── send task ── socket         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`messages`] - WebSocket message protocol types
//! - [`connection`] - Queue-backed `SubscriberConnection`
//! - [`handler`] - Axum WebSocket upgrade handler

pub mod connection;
pub mod handler;
pub mod messages;

pub use connection::ChannelConnection;
pub use handler::{
    websocket_router, ws_handler, WebSocketState, DEFAULT_CHANNEL_CAPACITY,
    DEFAULT_MAX_FRAME_BYTES,
};
pub use messages::{
    ClientMessage, ConnectedMessage, ErrorMessage, EventMessage, PongMessage, ServerMessage,
};
