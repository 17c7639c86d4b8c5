//! Alarm Gateway - real-time alarm relay for refrigerated-unit monitoring
//!
//! Producers emit facility registrations and temperature alarms as JSON
//! envelopes. The gateway validates each envelope against its event schema
//! and broadcasts it to every connected WebSocket subscriber.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
