//! WebSocket message types for real-time alarm delivery.
//!
//! Defines the protocol between server and connected clients:
//! - Server → Client: Connection status, relayed events, errors, pongs
//! - Client → Server: Pings, event publishes from socket-connected producers

use serde::{Deserialize, Serialize};

use crate::domain::alarm::{AlarmEventKind, Envelope, GatewayError};
use crate::domain::foundation::{ErrorCode, SubscriberId, Timestamp};

// ============================================
// Server → Client Messages
// ============================================

/// All message types that can be sent from server to client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established and registered.
    Connected(ConnectedMessage),

    /// A relayed alarm event.
    Event(EventMessage),

    /// Error occurred handling something this client sent.
    Error(ErrorMessage),

    /// Heartbeat response.
    Pong(PongMessage),
}

impl ServerMessage {
    /// Frame carrying one relayed envelope.
    pub fn event(kind: AlarmEventKind, envelope: Envelope) -> Self {
        ServerMessage::Event(EventMessage {
            event: kind,
            data: envelope,
        })
    }

    /// Frame announcing the id assigned to a new subscriber.
    pub fn connected(subscriber_id: SubscriberId) -> Self {
        ServerMessage::Connected(ConnectedMessage {
            subscriber_id: subscriber_id.to_string(),
            timestamp: Timestamp::now().to_rfc3339(),
        })
    }

    /// Error frame with an explicit code.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ServerMessage::Error(ErrorMessage {
            code: code.to_string(),
            message: message.into(),
            timestamp: Timestamp::now().to_rfc3339(),
        })
    }

    /// Heartbeat response frame.
    pub fn pong() -> Self {
        ServerMessage::Pong(PongMessage {
            timestamp: Timestamp::now().to_rfc3339(),
        })
    }
}

impl From<&GatewayError> for ServerMessage {
    fn from(err: &GatewayError) -> Self {
        ServerMessage::error(err.code(), err.to_string())
    }
}

/// Sent once the connection is registered with the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedMessage {
    pub subscriber_id: String,
    pub timestamp: String,
}

/// A relayed event: the kind plus its opaque envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventMessage {
    pub event: AlarmEventKind,
    pub data: Envelope,
}

/// Error message sent to client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
    pub timestamp: String,
}

/// Heartbeat response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PongMessage {
    pub timestamp: String,
}

// ============================================
// Client → Server Messages
// ============================================

/// All message types that can be received from client.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Heartbeat request.
    Ping,

    /// Publish a named event to every subscriber (sender included).
    Publish { event: String, data: Envelope },
}
