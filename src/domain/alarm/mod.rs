//! Alarm domain - the events relayed to monitoring dashboards.
//!
//! - `FacilityRegistration` - a sensor unit was registered under a facility
//! - `TemperatureAlarm` - a recorded reading breached its temperature limit
//! - `Envelope` - the `{ message }` transport wrapper and its codec
//! - `GatewayError` - everything that can go wrong while relaying

mod envelope;
mod errors;
mod event_kind;
mod facility;
mod temperature;

pub use envelope::Envelope;
pub use errors::GatewayError;
pub use event_kind::{AlarmEvent, AlarmEventKind};
pub use facility::{FacilityRegistration, SensorUnit};
pub use temperature::{HistoryRecord, TemperatureAlarm, LIMIT_EXCEEDED_WARNING};
