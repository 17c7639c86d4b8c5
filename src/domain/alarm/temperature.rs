//! Temperature breach alarm event.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{AlarmEvent, AlarmEventKind};

/// Warning text producers attach when a reading leaves the allowed range.
pub const LIMIT_EXCEEDED_WARNING: &str = "TEMPERATURA ULTRAPASSOU A FAIXA LIMITE";

/// Alarm raised for a recorded reading that breached policy.
///
/// The breach decision belongs to the producer; the gateway only relays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureAlarm {
    #[serde(alias = "aviso")]
    pub warning_message: String,
    #[serde(alias = "esp")]
    pub reading: HistoryRecord,
}

impl TemperatureAlarm {
    /// Builds the standard limit-exceeded alarm for a reading.
    pub fn limit_exceeded(reading: HistoryRecord) -> Self {
        Self {
            warning_message: LIMIT_EXCEEDED_WARNING.to_string(),
            reading,
        }
    }
}

/// One persisted temperature reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: i64,
    pub created_at: Timestamp,
    #[serde(alias = "updateAt")]
    pub updated_at: Timestamp,
    #[serde(alias = "register")]
    pub register_code: String,
    pub temperature: f64,
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
    #[serde(alias = "esp_id")]
    pub sensor_id: i64,
}

impl AlarmEvent for TemperatureAlarm {
    const KIND: AlarmEventKind = AlarmEventKind::TemperatureAlarm;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reading() -> HistoryRecord {
        HistoryRecord {
            id: 1,
            created_at: "2023-12-12T18:15:05.012Z".parse().unwrap(),
            updated_at: "2023-12-12T18:15:05.012Z".parse().unwrap(),
            register_code: "HMACE-001".to_string(),
            temperature: 3.0,
            latitude: 25.0,
            longitude: 40.0,
            sensor_id: 1,
        }
    }

    #[test]
    fn limit_exceeded_uses_standard_warning() {
        let alarm = TemperatureAlarm::limit_exceeded(reading());
        assert_eq!(alarm.warning_message, "TEMPERATURA ULTRAPASSOU A FAIXA LIMITE");
        assert_eq!(alarm.reading, reading());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(TemperatureAlarm::limit_exceeded(reading())).unwrap();

        assert_eq!(json["warningMessage"], LIMIT_EXCEEDED_WARNING);
        assert_eq!(json["reading"]["createdAt"], "2023-12-12T18:15:05.012Z");
        assert_eq!(json["reading"]["sensorId"], 1);
        assert_eq!(json["reading"]["latitude"], 25.0);
    }

    #[test]
    fn accepts_legacy_producer_field_names() {
        let payload = json!({
            "aviso": "TEMPERATURA ULTRAPASSOU A FAIXA LIMITE",
            "esp": {
                "id": 1,
                "createdAt": "2023-12-12T18:15:05.012Z",
                "updateAt": "2023-12-12T18:15:05.012Z",
                "register": "HMACE-001",
                "temperature": 3,
                "lat": 25,
                "lon": 40,
                "esp_id": 1
            }
        });

        let parsed: TemperatureAlarm = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed, TemperatureAlarm::limit_exceeded(reading()));
    }

    #[test]
    fn missing_reading_is_rejected() {
        let payload = json!({ "warningMessage": LIMIT_EXCEEDED_WARNING });
        assert!(serde_json::from_value::<TemperatureAlarm>(payload).is_err());
    }
}
