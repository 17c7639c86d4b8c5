//! WebSocket upgrade handler for alarm subscribers.
//!
//! Handles the HTTP → WebSocket upgrade and manages the connection lifecycle:
//! 1. Upgrade to WebSocket
//! 2. Register a queue-backed connection with the gateway
//! 3. Forward queued frames to the client; handle pings and publishes
//! 4. Unregister on disconnect, send failure, or gateway shutdown

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::application::{AlarmGateway, RelayOutcome};
use crate::domain::foundation::{ErrorCode, SubscriberId};
use crate::ports::SubscriberConnection;

use super::{
    connection::ChannelConnection,
    messages::{ClientMessage, ServerMessage},
};

/// Default outbound queue length per subscriber.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Default largest accepted inbound text frame.
pub const DEFAULT_MAX_FRAME_BYTES: usize = 64 * 1024;

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct WebSocketState {
    pub gateway: Arc<AlarmGateway>,
    /// Outbound queue length for each connection.
    pub channel_capacity: usize,
    /// Inbound text frames above this size are rejected.
    pub max_frame_bytes: usize,
}

impl WebSocketState {
    /// Create a new WebSocket state with default limits.
    pub fn new(gateway: Arc<AlarmGateway>) -> Self {
        Self {
            gateway,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
        }
    }

    pub fn with_limits(mut self, channel_capacity: usize, max_frame_bytes: usize) -> Self {
        self.channel_capacity = channel_capacity;
        self.max_frame_bytes = max_frame_bytes;
        self
    }
}

/// Handle WebSocket upgrade requests.
///
/// Route: `GET /ws`
///
/// Handshake, authentication and origin checks are left to the layers in
/// front of this handler.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<WebSocketState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an established WebSocket connection.
///
/// Runs for the lifetime of the connection.
async fn handle_socket(socket: WebSocket, state: WebSocketState) {
    let (mut sender, mut receiver) = socket.split();

    let (connection, mut outbound) = ChannelConnection::new(state.channel_capacity);
    let replies = connection.reply_sender();
    let mut closed = connection.closed_signal();
    let connection = Arc::new(connection);

    let subscriber_id = match state.gateway.on_connect(connection.clone()).await {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!("Rejecting connection: {}", e);
            let _ = send_message(&mut sender, &ServerMessage::from(&e)).await;
            let _ = sender.close().await;
            return;
        }
    };

    if let Err(e) = send_message(&mut sender, &ServerMessage::connected(subscriber_id)).await {
        tracing::debug!(subscriber = %subscriber_id, "Failed to send connected message: {}", e);
        state.gateway.on_disconnect(&subscriber_id).await;
        return; // Client disconnected immediately
    }

    // Forward queued frames to the client until the queue or socket closes
    let mut send_task = tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;

                frame = outbound.recv() => {
                    let Some(frame) = frame else { break };
                    if let Err(e) = send_message(&mut sender, &frame).await {
                        tracing::debug!(
                            subscriber = %subscriber_id,
                            "Send error, closing connection: {}",
                            e
                        );
                        break;
                    }
                }
                _ = closed.changed() => {
                    // Frames queued before close were already counted as delivered
                    while let Ok(frame) = outbound.try_recv() {
                        if send_message(&mut sender, &frame).await.is_err() {
                            break;
                        }
                    }
                    let _ = sender.send(Message::Close(None)).await;
                    break;
                }
            }
        }
    });

    // Handle incoming messages from client
    let gateway = state.gateway.clone();
    let max_frame_bytes = state.max_frame_bytes;
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Text(text)) => {
                    handle_text(&gateway, &replies, subscriber_id, &text, max_frame_bytes).await;
                }
                Ok(Message::Binary(_)) => {
                    tracing::warn!(
                        subscriber = %subscriber_id,
                        "Received unsupported binary message"
                    );
                }
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {
                    // WebSocket protocol heartbeats - handled automatically by axum
                }
                Ok(Message::Close(_)) => {
                    tracing::debug!(subscriber = %subscriber_id, "Client sent close frame");
                    break;
                }
                Err(e) => {
                    tracing::debug!(subscriber = %subscriber_id, "Receive error: {}", e);
                    break;
                }
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    state.gateway.on_disconnect(&subscriber_id).await;
    connection.close();
}

/// Process one inbound text frame.
async fn handle_text(
    gateway: &AlarmGateway,
    replies: &mpsc::Sender<ServerMessage>,
    subscriber_id: SubscriberId,
    text: &str,
    max_frame_bytes: usize,
) {
    if text.len() > max_frame_bytes {
        tracing::warn!(subscriber = %subscriber_id, size = text.len(), "Rejecting oversized frame");
        let reply = ServerMessage::error(
            ErrorCode::FrameTooLarge,
            format!("Frame exceeds {} bytes", max_frame_bytes),
        );
        let _ = replies.send(reply).await;
        return;
    }

    match serde_json::from_str::<ClientMessage>(text) {
        Ok(ClientMessage::Ping) => {
            tracing::trace!(subscriber = %subscriber_id, "Received ping");
            let _ = replies.send(ServerMessage::pong()).await;
        }
        Ok(ClientMessage::Publish { event, data }) => {
            if let RelayOutcome::Dropped(e) = gateway.dispatch(&event, data).await {
                let _ = replies.send(ServerMessage::from(&e)).await;
            }
        }
        Err(e) => {
            tracing::debug!(subscriber = %subscriber_id, "Unparseable client message: {}", e);
            let reply = ServerMessage::error(ErrorCode::MalformedPayload, e.to_string());
            let _ = replies.send(reply).await;
        }
    }
}

/// Send a JSON message over the WebSocket.
async fn send_message(
    sender: &mut futures::stream::SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    sender.send(Message::Text(json)).await
}

/// Create axum router for the WebSocket endpoint.
pub fn websocket_router() -> axum::Router<WebSocketState> {
    use axum::routing::get;

    axum::Router::new().route("/ws", get(ws_handler))
}
