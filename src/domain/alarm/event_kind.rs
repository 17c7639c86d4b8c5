//! Named kinds of events the gateway relays.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::GatewayError;

/// The kinds of alarm events relayed to subscribers.
///
/// The wire name doubles as the dispatch key for inbound publishes and as
/// the `event` field of outbound frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlarmEventKind {
    /// A sensor unit was registered under a facility.
    #[serde(rename = "facility.registered")]
    FacilityRegistered,
    /// A temperature reading breached the configured limit.
    #[serde(rename = "temperature.alarm")]
    TemperatureAlarm,
}

impl AlarmEventKind {
    /// All kinds, in a stable order.
    pub const ALL: [AlarmEventKind; 2] = [
        AlarmEventKind::FacilityRegistered,
        AlarmEventKind::TemperatureAlarm,
    ];

    /// Wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlarmEventKind::FacilityRegistered => "facility.registered",
            AlarmEventKind::TemperatureAlarm => "temperature.alarm",
        }
    }
}

impl fmt::Display for AlarmEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlarmEventKind {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GatewayError::UnknownEvent(s.to_string()))
    }
}

/// A domain event with a fixed schema and kind.
///
/// The envelope carries no discriminator, so the kind is bound to the type.
pub trait AlarmEvent: Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: AlarmEventKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_through_wire_names() {
        for kind in AlarmEventKind::ALL {
            assert_eq!(kind.as_str().parse::<AlarmEventKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "esp.deleted".parse::<AlarmEventKind>().unwrap_err();
        assert_eq!(err, GatewayError::UnknownEvent("esp.deleted".to_string()));
    }

    #[test]
    fn kind_serializes_as_wire_name() {
        let json = serde_json::to_string(&AlarmEventKind::TemperatureAlarm).unwrap();
        assert_eq!(json, "\"temperature.alarm\"");
    }
}
