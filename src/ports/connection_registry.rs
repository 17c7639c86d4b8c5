//! ConnectionRegistry port - Interface for tracking live subscribers.
//!
//! The registry owns every subscriber connection from connect until
//! disconnect or shutdown, and is the only shared mutable state of the
//! gateway.
//!
//! ## Lifecycle
//!
//! 1. Transport accepts a socket and calls `register`
//! 2. Producers trigger `broadcast`, which snapshots the current members
//! 3. Transport observes the disconnect and calls `unregister`
//! 4. `shutdown` rejects new members, drains broadcasts, closes the rest

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::alarm::{AlarmEventKind, Envelope, GatewayError};
use crate::domain::foundation::SubscriberId;

use super::SubscriberConnection;

/// Outcome of one fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Subscribers in the snapshot.
    pub attempted: usize,
    /// Pushes accepted.
    pub delivered: usize,
    /// Subscribers removed because their push failed or timed out.
    pub dropped: usize,
}

/// Port for tracking subscriber connections.
///
/// Implementations must:
/// - Hand out a distinct id for every `register`, including concurrent calls
/// - Treat `unregister` of an unknown id as a no-op
/// - Deliver each broadcast to exactly the members present when its
///   snapshot is taken, starting pushes in registration order
/// - Bound every push by a send timeout and drop subscribers that fail,
///   without failing the broadcast
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Register a connection.
    ///
    /// Fails with `RegistryUnavailable` once shutdown has begun.
    async fn register(
        &self,
        connection: Arc<dyn SubscriberConnection>,
    ) -> Result<SubscriberId, GatewayError>;

    /// Remove a connection. Unknown ids are ignored.
    async fn unregister(&self, id: &SubscriberId);

    /// Push an envelope to every registered connection.
    async fn broadcast(&self, kind: AlarmEventKind, envelope: &Envelope) -> BroadcastReport;

    /// Number of registered connections.
    async fn subscriber_count(&self) -> usize;

    /// Stop accepting registrations, wait for in-flight broadcasts, then
    /// close and remove every connection.
    async fn shutdown(&self);
}
