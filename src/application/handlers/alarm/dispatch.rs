//! Dispatch table from event names to schema-checking relays.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::alarm::{
    AlarmEvent, AlarmEventKind, Envelope, FacilityRegistration, GatewayError, TemperatureAlarm,
};

/// Validates an inbound envelope against one event schema.
pub trait EnvelopeRelay: Send + Sync {
    /// Kind this relay accepts.
    fn kind(&self) -> AlarmEventKind;

    /// Decode `raw` into the schema and re-encode it canonically.
    fn canonicalize(&self, raw: &Envelope) -> Result<Envelope, GatewayError>;
}

/// Relay for the schema `E`.
pub struct SchemaRelay<E> {
    _schema: PhantomData<fn() -> E>,
}

impl<E> SchemaRelay<E> {
    pub fn new() -> Self {
        Self {
            _schema: PhantomData,
        }
    }
}

impl<E> Default for SchemaRelay<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AlarmEvent> EnvelopeRelay for SchemaRelay<E> {
    fn kind(&self) -> AlarmEventKind {
        E::KIND
    }

    fn canonicalize(&self, raw: &Envelope) -> Result<Envelope, GatewayError> {
        let event: E = raw.decode()?;
        Envelope::encode(&event)
    }
}

/// Named routes, built once at startup and owned by the gateway.
pub struct DispatchTable {
    routes: HashMap<&'static str, Arc<dyn EnvelopeRelay>>,
}

impl DispatchTable {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// The table with every event the gateway relays.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register::<FacilityRegistration>();
        table.register::<TemperatureAlarm>();
        table
    }

    /// Route `E::KIND` to a relay for `E`, replacing any previous route.
    pub fn register<E: AlarmEvent>(&mut self) {
        self.routes
            .insert(E::KIND.as_str(), Arc::new(SchemaRelay::<E>::new()));
    }

    /// Look up the relay for an event name.
    pub fn route(&self, event_name: &str) -> Result<&dyn EnvelopeRelay, GatewayError> {
        self.routes
            .get(event_name)
            .map(|relay| relay.as_ref())
            .ok_or_else(|| GatewayError::UnknownEvent(event_name.to_string()))
    }

    /// Registered event names, sorted.
    pub fn event_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.routes.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::standard()
    }
}
