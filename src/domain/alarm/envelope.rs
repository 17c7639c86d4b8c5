//! Transport envelope and codec.
//!
//! Every event crosses the wire as `{ "message": "<json>" }`: a single string
//! field holding the serialized domain object. Clients on any runtime can
//! carry it without knowing the event schema.

use serde::{Deserialize, Serialize};

use super::{AlarmEvent, GatewayError};

/// Single-field transport wrapper carrying a serialized domain event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub message: String,
}

impl Envelope {
    /// Wraps an already-serialized payload without inspecting it.
    pub fn raw(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Encodes an event as canonical JSON.
    pub fn encode<E: AlarmEvent>(event: &E) -> Result<Self, GatewayError> {
        serde_json::to_string(event)
            .map(|message| Self { message })
            .map_err(|e| GatewayError::malformed(E::KIND.as_str(), e))
    }

    /// Decodes the payload into the event schema `E`.
    ///
    /// Fails with `MalformedPayload` when the message is not JSON or does not
    /// match the shape of `E`.
    pub fn decode<E: AlarmEvent>(&self) -> Result<E, GatewayError> {
        serde_json::from_str(&self.message).map_err(|e| GatewayError::malformed(E::KIND.as_str(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alarm::{FacilityRegistration, HistoryRecord, SensorUnit, TemperatureAlarm};
    use crate::domain::foundation::Timestamp;
    use proptest::prelude::*;

    fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
        // 2000-01-01 .. 2100-01-01, millisecond precision
        (946_684_800_000i64..4_102_444_800_000i64)
            .prop_map(|ms| Timestamp::from_unix_millis(ms).unwrap())
    }

    // Tenths of a degree; decimal values that survive a JSON round trip exactly.
    fn arb_temperature() -> impl Strategy<Value = f64> {
        (-800i32..=800).prop_map(|t| f64::from(t) / 10.0)
    }

    fn arb_coordinate() -> impl Strategy<Value = f64> {
        (-1_800_000i32..=1_800_000).prop_map(|c| f64::from(c) / 10_000.0)
    }

    fn arb_sensor() -> impl Strategy<Value = SensorUnit> {
        (
            any::<i64>(),
            arb_timestamp(),
            "[A-Z]{2,6}-[0-9]{3}",
            arb_temperature(),
            "\\PC{0,12}",
        )
            .prop_map(|(id, updated_at, register_code, temperature, sensor_type)| SensorUnit {
                id,
                updated_at,
                register_code,
                temperature,
                sensor_type,
            })
    }

    fn arb_history() -> impl Strategy<Value = HistoryRecord> {
        (
            any::<i64>(),
            arb_timestamp(),
            arb_timestamp(),
            "[A-Z]{2,6}-[0-9]{3}",
            arb_temperature(),
            arb_coordinate(),
            arb_coordinate(),
            any::<i64>(),
        )
            .prop_map(
                |(id, created_at, updated_at, register_code, temperature, latitude, longitude, sensor_id)| {
                    HistoryRecord {
                        id,
                        created_at,
                        updated_at,
                        register_code,
                        temperature,
                        latitude,
                        longitude,
                        sensor_id,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn facility_registration_round_trips(
            name in "\\PC{0,24}",
            city in "\\PC{0,24}",
            state in "\\PC{0,24}",
            sensors in prop::collection::vec(arb_sensor(), 0..5),
        ) {
            let event = FacilityRegistration { name, city, state, sensors };
            let decoded: FacilityRegistration = Envelope::encode(&event)?.decode()?;
            prop_assert_eq!(decoded, event);
        }

        #[test]
        fn temperature_alarm_round_trips(
            warning_message in "\\PC{0,48}",
            reading in arb_history(),
        ) {
            let event = TemperatureAlarm { warning_message, reading };
            let decoded: TemperatureAlarm = Envelope::encode(&event)?.decode()?;
            prop_assert_eq!(decoded, event);
        }
    }

    #[test]
    fn decode_rejects_non_json() {
        let err = Envelope::raw("not json at all")
            .decode::<TemperatureAlarm>()
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::MalformedPayload { event: "temperature.alarm", .. }
        ));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let err = Envelope::raw(r#"{"name":"HEMOCENTRO REGIONAL"}"#)
            .decode::<FacilityRegistration>()
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::MalformedPayload { event: "facility.registered", .. }
        ));
    }

    #[test]
    fn envelope_serializes_as_single_message_field() {
        let json = serde_json::to_value(Envelope::raw("{}")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "{}" }));
    }
}
