//! SubscriberConnection port - one live push channel to an observer.
//!
//! The transport layer (WebSocket, test doubles) implements this trait and
//! hands the connection to the registry on connect.

use async_trait::async_trait;

use crate::domain::alarm::{AlarmEventKind, Envelope};

/// Errors a connection can report when accepting a push.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The remote side is gone.
    #[error("Connection closed")]
    Closed,

    /// The transport refused the message.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Port for pushing envelopes to a single subscriber.
///
/// Implementations should:
/// - Return once the envelope is queued for the remote side (not acknowledged)
/// - Apply backpressure by awaiting while their outbound buffer is full;
///   the registry bounds that wait with its send timeout
/// - Treat `close` as idempotent
#[async_trait]
pub trait SubscriberConnection: Send + Sync {
    /// Push one envelope of the given kind.
    async fn push(&self, kind: AlarmEventKind, envelope: &Envelope) -> Result<(), DeliveryError>;

    /// Close the underlying channel.
    ///
    /// Called when the registry drops the subscriber or shuts down.
    fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SubscriberConnection) {}

    #[test]
    fn delivery_error_displays() {
        assert_eq!(DeliveryError::Closed.to_string(), "Connection closed");
        assert_eq!(
            DeliveryError::Transport("reset".to_string()).to_string(),
            "Transport error: reset"
        );
    }
}
