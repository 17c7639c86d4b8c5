//! AlarmGateway - relays alarm events to every connected subscriber.
//!
//! Each handler call is independent: decode the inbound envelope against
//! its schema, re-encode it canonically, broadcast through the registry.
//! Malformed input is logged and dropped; it never fails the caller or
//! reaches a subscriber.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::alarm::{
    AlarmEvent, AlarmEventKind, Envelope, FacilityRegistration, GatewayError, TemperatureAlarm,
};
use crate::domain::foundation::SubscriberId;
use crate::ports::{AlarmPublisher, BroadcastReport, ConnectionRegistry, SubscriberConnection};

use super::dispatch::DispatchTable;

/// Result of one handler call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The envelope was broadcast.
    Broadcast(BroadcastReport),
    /// The envelope was rejected before any subscriber saw it.
    Dropped(GatewayError),
}

impl RelayOutcome {
    /// The broadcast report, if the event went out.
    pub fn report(&self) -> Option<&BroadcastReport> {
        match self {
            RelayOutcome::Broadcast(report) => Some(report),
            RelayOutcome::Dropped(_) => None,
        }
    }
}

/// Orchestrates envelope validation and fan-out.
///
/// Construct once per process and share by `Arc`; the only state it
/// touches is the injected registry.
pub struct AlarmGateway {
    registry: Arc<dyn ConnectionRegistry>,
    routes: DispatchTable,
}

impl AlarmGateway {
    /// Gateway with the standard routes.
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self::with_routes(registry, DispatchTable::standard())
    }

    pub fn with_routes(registry: Arc<dyn ConnectionRegistry>, routes: DispatchTable) -> Self {
        Self { registry, routes }
    }

    pub fn registry(&self) -> &Arc<dyn ConnectionRegistry> {
        &self.registry
    }

    pub fn routes(&self) -> &DispatchTable {
        &self.routes
    }

    /// Relay a facility registration envelope.
    pub async fn handle_facility_registered(&self, raw: Envelope) -> RelayOutcome {
        self.dispatch(AlarmEventKind::FacilityRegistered.as_str(), raw)
            .await
    }

    /// Relay a temperature alarm envelope.
    pub async fn handle_temperature_alarm(&self, raw: Envelope) -> RelayOutcome {
        self.dispatch(AlarmEventKind::TemperatureAlarm.as_str(), raw)
            .await
    }

    /// Relay an envelope by event name.
    pub async fn dispatch(&self, event_name: &str, raw: Envelope) -> RelayOutcome {
        match self.try_dispatch(event_name, &raw).await {
            Ok(report) => RelayOutcome::Broadcast(report),
            Err(e) => {
                tracing::warn!(
                    event = %event_name,
                    code = %e.code(),
                    "Dropping inbound event: {}",
                    e
                );
                RelayOutcome::Dropped(e)
            }
        }
    }

    async fn try_dispatch(
        &self,
        event_name: &str,
        raw: &Envelope,
    ) -> Result<BroadcastReport, GatewayError> {
        let relay = self.routes.route(event_name)?;
        let canonical = relay.canonicalize(raw)?;
        Ok(self.registry.broadcast(relay.kind(), &canonical).await)
    }

    async fn publish<E: AlarmEvent>(&self, event: &E) -> Result<BroadcastReport, GatewayError> {
        let envelope = Envelope::encode(event)?;
        Ok(self.registry.broadcast(E::KIND, &envelope).await)
    }

    /// Register a newly connected subscriber.
    pub async fn on_connect(
        &self,
        connection: Arc<dyn SubscriberConnection>,
    ) -> Result<SubscriberId, GatewayError> {
        self.registry.register(connection).await
    }

    /// Forget a subscriber. Unknown ids are ignored.
    pub async fn on_disconnect(&self, id: &SubscriberId) {
        self.registry.unregister(id).await;
    }

    /// Drain in-flight broadcasts and close every subscriber.
    pub async fn shutdown(&self) {
        self.registry.shutdown().await;
    }
}

#[async_trait]
impl AlarmPublisher for AlarmGateway {
    async fn publish_facility_registered(
        &self,
        event: &FacilityRegistration,
    ) -> Result<BroadcastReport, GatewayError> {
        self.publish(event).await
    }

    async fn publish_temperature_alarm(
        &self,
        event: &TemperatureAlarm,
    ) -> Result<BroadcastReport, GatewayError> {
        self.publish(event).await
    }
}
