//! Alarm relay handlers.

mod dispatch;
mod gateway;

pub use dispatch::{DispatchTable, EnvelopeRelay, SchemaRelay};
pub use gateway::{AlarmGateway, RelayOutcome};
