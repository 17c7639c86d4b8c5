//! Application handlers.
//!
//! Handlers that relay producer events to subscribers.

pub mod alarm;

pub use alarm::{AlarmGateway, DispatchTable, EnvelopeRelay, RelayOutcome, SchemaRelay};
