//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the gateway core and the outside world. Adapters implement these ports.
//!
//! - `SubscriberConnection` - One live push channel to an observer
//! - `ConnectionRegistry` - The set of live subscribers and fan-out
//! - `AlarmPublisher` - Typed entry point for event producers

mod alarm_publisher;
mod connection_registry;
mod subscriber_connection;

pub use alarm_publisher::AlarmPublisher;
pub use connection_registry::{BroadcastReport, ConnectionRegistry};
pub use subscriber_connection::{DeliveryError, SubscriberConnection};
