//! AlarmPublisher port - Interface producers use to raise alarm events.
//!
//! The registration and temperature-ingestion workflows decide *when* an
//! event fires; this port is how they hand it to the gateway without knowing
//! about the envelope format or the connected subscribers.

use async_trait::async_trait;

use crate::domain::alarm::{FacilityRegistration, GatewayError, TemperatureAlarm};

use super::BroadcastReport;

/// Port for publishing typed alarm events to live subscribers.
///
/// Delivery is best-effort: subscribers not connected at broadcast time
/// never see the event, and there is no acknowledgement.
///
/// # Example
///
/// ```ignore
/// if reading.temperature > limit {
///     publisher
///         .publish_temperature_alarm(&TemperatureAlarm::limit_exceeded(reading))
///         .await?;
/// }
/// ```
#[async_trait]
pub trait AlarmPublisher: Send + Sync {
    /// Announce a facility and its newly registered sensor units.
    async fn publish_facility_registered(
        &self,
        event: &FacilityRegistration,
    ) -> Result<BroadcastReport, GatewayError>;

    /// Announce a temperature breach for a recorded reading.
    async fn publish_temperature_alarm(
        &self,
        event: &TemperatureAlarm,
    ) -> Result<BroadcastReport, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn AlarmPublisher) {}

    // Compile-time check that trait is Send + Sync
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn alarm_publisher_is_send_sync() {
        fn check<T: AlarmPublisher>() {
            assert_send_sync::<T>();
        }
    }
}
