//! Facility registration event.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{AlarmEvent, AlarmEventKind};

/// A monitored facility together with the sensor units registered under it.
///
/// Emitted by the registration workflow when a new sensor unit is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRegistration {
    pub name: String,
    pub city: String,
    pub state: String,
    /// Registration order.
    #[serde(alias = "esps")]
    pub sensors: Vec<SensorUnit>,
}

/// An embedded temperature sensor ("ESP") attached to a refrigeration unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorUnit {
    pub id: i64,
    #[serde(alias = "updateAt")]
    pub updated_at: Timestamp,
    #[serde(alias = "register")]
    pub register_code: String,
    pub temperature: f64,
    #[serde(alias = "typeEsp")]
    pub sensor_type: String,
}

impl AlarmEvent for FacilityRegistration {
    const KIND: AlarmEventKind = AlarmEventKind::FacilityRegistered;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hemocentro() -> FacilityRegistration {
        FacilityRegistration {
            name: "HEMOCENTRO REGIONAL".to_string(),
            city: "IGUATU".to_string(),
            state: "CEARÁ".to_string(),
            sensors: vec![SensorUnit {
                id: 1,
                updated_at: "2023-12-12T18:15:05.012Z".parse().unwrap(),
                register_code: "HMACE-001".to_string(),
                temperature: 3.0,
                sensor_type: "GPS".to_string(),
            }],
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(hemocentro()).unwrap();
        let sensor = &json["sensors"][0];

        assert_eq!(json["state"], "CEARÁ");
        assert_eq!(sensor["updatedAt"], "2023-12-12T18:15:05.012Z");
        assert_eq!(sensor["registerCode"], "HMACE-001");
        assert_eq!(sensor["sensorType"], "GPS");
    }

    #[test]
    fn deserializes_canonical_payload() {
        let payload = json!({
            "name": "HEMOCENTRO REGIONAL",
            "city": "IGUATU",
            "state": "CEARÁ",
            "sensors": [{
                "id": 1,
                "updatedAt": "2023-12-12T18:15:05.012Z",
                "registerCode": "HMACE-001",
                "temperature": 3,
                "sensorType": "GPS"
            }]
        });

        let parsed: FacilityRegistration = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed, hemocentro());
    }

    #[test]
    fn accepts_legacy_producer_field_names() {
        let payload = json!({
            "name": "HEMOCENTRO REGIONAL",
            "city": "IGUATU",
            "state": "CEARÁ",
            "esps": [{
                "id": 1,
                "updateAt": "2023-12-12T18:15:05.012Z",
                "register": "HMACE-001",
                "temperature": 3,
                "typeEsp": "GPS"
            }]
        });

        let parsed: FacilityRegistration = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed, hemocentro());
    }

    #[test]
    fn facility_without_sensors_is_valid() {
        let payload = json!({ "name": "UPA", "city": "CRATO", "state": "CEARÁ", "sensors": [] });
        let parsed: FacilityRegistration = serde_json::from_value(payload).unwrap();
        assert!(parsed.sensors.is_empty());
    }
}
