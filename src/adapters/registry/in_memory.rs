//! In-process connection registry.
//!
//! Holds every live subscriber of this gateway instance and fans envelopes
//! out to them.
//!
//! # Architecture
//!
//! ```text
//! broadcast(kind, envelope)
//!        │
//!        ├── snapshot members (read lock, released before sending)
//!        │
//!        ├── push to sub-1 ─┐
//!        ├── push to sub-2 ─┼── each bounded by send_timeout
//!        └── push to sub-3 ─┘
//!                │
//!                └── failed / timed out → unregister + close
//! ```

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tokio::sync::RwLock;

use crate::domain::alarm::{AlarmEventKind, Envelope, GatewayError};
use crate::domain::foundation::SubscriberId;
use crate::ports::{BroadcastReport, ConnectionRegistry, SubscriberConnection};

/// Default bound on a single push.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Registry of live subscriber connections.
///
/// # Thread Safety
///
/// Members live behind a `RwLock`: broadcasts only hold the read lock long
/// enough to clone a snapshot, so slow subscribers never block
/// connect/disconnect. A second lock (`in_flight`) is held for reading by
/// every broadcast; shutdown takes it for writing to wait them out.
pub struct InMemoryConnectionRegistry {
    /// Keyed by id, which is allocated in registration order.
    connections: RwLock<BTreeMap<SubscriberId, Arc<dyn SubscriberConnection>>>,

    next_id: AtomicU64,

    accepting: AtomicBool,

    in_flight: RwLock<()>,

    send_timeout: Duration,
}

impl InMemoryConnectionRegistry {
    /// Create a registry that bounds each push by `send_timeout`.
    pub fn new(send_timeout: Duration) -> Self {
        Self {
            connections: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            accepting: AtomicBool::new(true),
            in_flight: RwLock::new(()),
            send_timeout,
        }
    }

    /// Create with the default 5 second send timeout.
    pub fn with_default_timeout() -> Self {
        Self::new(DEFAULT_SEND_TIMEOUT)
    }

    /// Ids of all registered subscribers, in registration order.
    pub async fn subscriber_ids(&self) -> Vec<SubscriberId> {
        self.connections.read().await.keys().copied().collect()
    }

    /// Whether `register` is still accepted.
    pub fn is_accepting(&self) -> bool {
        self.accepting.load(Ordering::SeqCst)
    }

    async fn deliver(
        &self,
        id: SubscriberId,
        connection: &dyn SubscriberConnection,
        kind: AlarmEventKind,
        envelope: &Envelope,
    ) -> Result<(), GatewayError> {
        match tokio::time::timeout(self.send_timeout, connection.push(kind, envelope)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(GatewayError::DeliveryFailed {
                subscriber: id,
                reason: e.to_string(),
            }),
            Err(_) => Err(GatewayError::DeliveryTimeout {
                subscriber: id,
                timeout_ms: u64::try_from(self.send_timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }
}

impl Default for InMemoryConnectionRegistry {
    fn default() -> Self {
        Self::with_default_timeout()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(
        &self,
        connection: Arc<dyn SubscriberConnection>,
    ) -> Result<SubscriberId, GatewayError> {
        let mut connections = self.connections.write().await;

        // Checked under the write lock so shutdown cannot interleave
        if !self.is_accepting() {
            return Err(GatewayError::RegistryUnavailable);
        }

        let id = SubscriberId::from_sequence(self.next_id.fetch_add(1, Ordering::SeqCst));
        connections.insert(id, connection);

        tracing::debug!(subscriber = %id, total = connections.len(), "Subscriber registered");
        Ok(id)
    }

    async fn unregister(&self, id: &SubscriberId) {
        let removed = self.connections.write().await.remove(id);

        if removed.is_some() {
            tracing::debug!(subscriber = %id, "Subscriber unregistered");
        }
    }

    async fn broadcast(&self, kind: AlarmEventKind, envelope: &Envelope) -> BroadcastReport {
        let _in_flight = self.in_flight.read().await;

        // Snapshot, then release the lock before any await on a subscriber
        let snapshot: Vec<(SubscriberId, Arc<dyn SubscriberConnection>)> = self
            .connections
            .read()
            .await
            .iter()
            .map(|(id, connection)| (*id, Arc::clone(connection)))
            .collect();

        let attempts = snapshot.iter().map(|(id, connection)| async move {
            (*id, self.deliver(*id, connection.as_ref(), kind, envelope).await)
        });
        let results = join_all(attempts).await;

        let mut report = BroadcastReport {
            attempted: snapshot.len(),
            ..Default::default()
        };

        for (id, result) in results {
            match result {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::warn!(
                        subscriber = %id,
                        event = %kind,
                        code = %e.code(),
                        "Dropping subscriber: {}",
                        e
                    );
                    if let Some(connection) = self.connections.write().await.remove(&id) {
                        connection.close();
                    }
                    report.dropped += 1;
                }
            }
        }

        tracing::debug!(
            event = %kind,
            attempted = report.attempted,
            delivered = report.delivered,
            dropped = report.dropped,
            "Broadcast complete"
        );

        report
    }

    async fn subscriber_count(&self) -> usize {
        self.connections.read().await.len()
    }

    async fn shutdown(&self) {
        {
            // Flip under the write lock so no register can slip in afterwards
            let _connections = self.connections.write().await;
            self.accepting.store(false, Ordering::SeqCst);
        }

        // Waits for every in-flight broadcast to release its read guard
        let _drained = self.in_flight.write().await;

        let connections = std::mem::take(&mut *self.connections.write().await);
        let closed = connections.len();
        for connection in connections.into_values() {
            connection.close();
        }

        tracing::info!(closed, "Connection registry shut down");
    }
}
