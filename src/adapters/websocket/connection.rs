//! Queue-backed subscriber connection.
//!
//! The registry pushes into a bounded queue; the socket's send task drains
//! it. A full queue makes `push` wait, which the registry's send timeout
//! turns into a dropped subscriber.

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};

use crate::domain::alarm::{AlarmEventKind, Envelope};
use crate::ports::{DeliveryError, SubscriberConnection};

use super::messages::ServerMessage;

/// A subscriber connection backed by a bounded `mpsc` queue.
pub struct ChannelConnection {
    tx: mpsc::Sender<ServerMessage>,
    closed: watch::Sender<bool>,
}

impl ChannelConnection {
    /// Create a connection with room for `capacity` queued frames.
    ///
    /// Returns the receiving end the transport drains.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<ServerMessage>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let (closed, _) = watch::channel(false);
        (Self { tx, closed }, rx)
    }

    /// Sender for frames that bypass the registry (pongs, error replies).
    pub fn reply_sender(&self) -> mpsc::Sender<ServerMessage> {
        self.tx.clone()
    }

    /// Watch that flips to `true` when the connection is closed.
    pub fn closed_signal(&self) -> watch::Receiver<bool> {
        self.closed.subscribe()
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }
}

#[async_trait]
impl SubscriberConnection for ChannelConnection {
    async fn push(&self, kind: AlarmEventKind, envelope: &Envelope) -> Result<(), DeliveryError> {
        if self.is_closed() {
            return Err(DeliveryError::Closed);
        }

        self.tx
            .send(ServerMessage::event(kind, envelope.clone()))
            .await
            .map_err(|_| DeliveryError::Closed)
    }

    fn close(&self) {
        self.closed.send_replace(true);
    }
}
