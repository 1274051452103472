// Cloud record models
//
// Unlike the local gateway, the cloud API returns genuinely nested
// payloads, wrapped in a `{"data": ...}` envelope. Fields use
// `#[serde(default)]` liberally because presence varies per installation
// platform and API version.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

// ── Envelope ─────────────────────────────────────────────────────────

/// Unwrap the `{"data": ...}` envelope and decode the payload, which is
/// a list for collection endpoints and an object for item endpoints.
pub(crate) fn decode_data<T: DeserializeOwned>(body: &Value) -> Result<T, Error> {
    let data = body.get("data").ok_or_else(|| Error::Deserialization {
        message: "response envelope is missing the `data` field".into(),
        body: body.to_string(),
    })?;
    serde_json::from_value(data.clone()).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body: data.to_string(),
    })
}

// ── Location ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorCoordinates {
    pub x: i64,
    pub y: i64,
}

/// Physical placement of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLocation")]
pub struct Location {
    pub installation_id: i64,
    pub gateway_id: i64,
    pub floor_id: i64,
    pub room_id: i64,
    pub floor_coordinates: Option<FloorCoordinates>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawLocation {
    #[serde(default)]
    installation_id: i64,
    #[serde(default)]
    gateway_id: i64,
    #[serde(default)]
    floor_id: i64,
    #[serde(default, alias = "room")]
    room_id: Option<i64>,
    #[serde(default)]
    floor_coordinates: Option<RawFloorCoordinates>,
}

// Some records carry partial coordinates; only a complete pair is kept.
#[derive(Debug, Clone, Deserialize)]
struct RawFloorCoordinates {
    #[serde(default)]
    x: Option<i64>,
    #[serde(default)]
    y: Option<i64>,
}

impl From<RawLocation> for Location {
    fn from(raw: RawLocation) -> Self {
        let floor_coordinates = raw.floor_coordinates.and_then(|fc| match (fc.x, fc.y) {
            (Some(x), Some(y)) => Some(FloorCoordinates { x, y }),
            _ => None,
        });
        Self {
            installation_id: raw.installation_id,
            gateway_id: raw.gateway_id,
            floor_id: raw.floor_id,
            room_id: raw.room_id.unwrap_or_default(),
            floor_coordinates,
        }
    }
}

// ── Installation ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowed {
    #[serde(default)]
    pub allowed: Option<bool>,
}

/// Per-capability permissions of the caller on an installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acl {
    #[serde(default)]
    pub configure: Option<Allowed>,
    #[serde(default)]
    pub view: Option<Allowed>,
    #[serde(default)]
    pub control: Option<Allowed>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub local_ip_address: Option<String>,
}

/// A tenant site: one physical gateway registered in the cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installation {
    #[serde(rename = "id")]
    pub idx: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gateway_model: Option<String>,
    #[serde(default, rename = "_acl")]
    pub acl: Option<Acl>,
    #[serde(default, rename = "_version")]
    pub version: Option<f64>,
    #[serde(default)]
    pub user_role: Option<Value>,
    #[serde(default)]
    pub registration_key: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub building_roles: Option<Value>,
    #[serde(default)]
    pub network: Option<Network>,
    #[serde(default)]
    pub flags: Option<Value>,
    #[serde(default)]
    pub features: Option<Value>,
}

// ── Outputs & lights ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputStatus {
    #[serde(default)]
    pub on: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub value: Option<i64>,
}

/// A relay or dimmer output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    #[serde(rename = "id")]
    pub idx: i64,
    #[serde(default)]
    pub local_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub status: Option<OutputStatus>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightStatus {
    #[serde(default)]
    pub on: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub manual_override: bool,
    #[serde(default)]
    pub value: Option<i64>,
}

/// A light point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    #[serde(rename = "id")]
    pub idx: i64,
    #[serde(default)]
    pub local_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub status: Option<LightStatus>,
}

// ── Inputs ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputStatus {
    #[serde(default)]
    pub on: bool,
}

/// A push button or other input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    #[serde(rename = "id")]
    pub idx: i64,
    #[serde(default)]
    pub local_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub status: Option<InputStatus>,
}

// ── Sensors ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorStatus {
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub brightness: Option<f64>,
}

/// An environmental sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(rename = "id")]
    pub idx: i64,
    #[serde(default)]
    pub local_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub physical_quantity: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub status: Option<SensorStatus>,
}

// ── Shutters ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShutterStatus {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub manual_override: bool,
    #[serde(default)]
    pub preset_position: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShutterAttributes {
    #[serde(default)]
    pub azimuth: Option<String>,
    #[serde(default)]
    pub compass_point: Option<String>,
    #[serde(default)]
    pub surface_area: Option<String>,
}

/// A shutter or blind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shutter {
    #[serde(rename = "id")]
    pub idx: i64,
    #[serde(default)]
    pub local_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub shutter_type: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub attributes: Option<ShutterAttributes>,
    #[serde(default)]
    pub status: Option<ShutterStatus>,
}

// ── Group actions ────────────────────────────────────────────────────

/// A scene-like list of actions triggered as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAction {
    #[serde(rename = "id")]
    pub idx: i64,
    #[serde(default)]
    pub local_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub actions: Vec<Value>,
}

// ── Thermostats ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermostatGroupStatus {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub state: Option<bool>,
}

/// A thermostat group (heating/cooling cluster).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermostatGroup {
    #[serde(rename = "id")]
    pub idx: i64,
    #[serde(default)]
    pub local_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub thermostat_ids: Vec<i64>,
    #[serde(default)]
    pub status: Option<ThermostatGroupStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermostatLocation {
    #[serde(default)]
    pub thermostat_group_id: i64,
    #[serde(default)]
    pub installation_id: i64,
    #[serde(default, alias = "room")]
    pub room_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermostatUnitStatus {
    #[serde(default)]
    pub actual_temperature: Option<f64>,
    #[serde(default, alias = "setpoint_temperature")]
    pub current_setpoint: Option<f64>,
    #[serde(default)]
    pub preset: Option<String>,
}

/// A single thermostat unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermostatUnit {
    #[serde(rename = "id")]
    pub idx: i64,
    #[serde(default)]
    pub local_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<ThermostatLocation>,
    #[serde(default)]
    pub status: Option<ThermostatUnitStatus>,
}

// ── Ventilation ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VentilationStatus {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// A ventilation unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VentilationUnit {
    #[serde(rename = "id")]
    pub idx: i64,
    #[serde(default)]
    pub local_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: Option<VentilationStatus>,
}

// ── Energy ───────────────────────────────────────────────────────────

/// A power-metering input. The cloud API has no energy endpoint; this
/// exists for parity with the local gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergySensor {
    #[serde(rename = "id")]
    pub idx: i64,
    #[serde(default)]
    pub local_id: i64,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{FloorCoordinates, Installation, Location, VentilationUnit, decode_data};

    #[test]
    fn installation_maps_underscore_aliases() {
        let installation: Installation = serde_json::from_value(json!({
            "id": 1,
            "name": "John Doe",
            "description": "",
            "gateway_model": "openmotics",
            "_acl": {"configure": {"allowed": true}, "view": {"allowed": true},
                     "control": {"allowed": true}},
            "_version": 1.0,
            "user_role": {"role": "ADMIN", "user_id": 1},
            "platform": "CLASSIC",
            "network": {"local_ip_address": "172.16.1.25"},
        }))
        .unwrap();

        assert_eq!(installation.idx, 1);
        assert_eq!(installation.name, "John Doe");
        assert_eq!(installation.version, Some(1.0));
        let acl = installation.acl.unwrap();
        assert_eq!(acl.control.unwrap().allowed, Some(true));
        assert_eq!(
            installation.network.unwrap().local_ip_address.as_deref(),
            Some("172.16.1.25")
        );
    }

    #[test]
    fn location_accepts_room_alias() {
        let location: Location = serde_json::from_value(json!({"room": 2})).unwrap();
        assert_eq!(location.room_id, 2);
    }

    #[test]
    fn partial_floor_coordinates_are_dropped() {
        let location: Location =
            serde_json::from_value(json!({"room_id": 1, "floor_coordinates": {"x": 10}})).unwrap();
        assert_eq!(location.floor_coordinates, None);

        let location: Location = serde_json::from_value(
            json!({"room_id": 1, "floor_coordinates": {"x": 10, "y": 20}}),
        )
        .unwrap();
        assert_eq!(
            location.floor_coordinates,
            Some(FloorCoordinates { x: 10, y: 20 })
        );
    }

    #[test]
    fn ventilation_unit_decodes_from_envelope() {
        let body = json!({"data": {
            "id": 1,
            "name": "Unit 1",
            "status": {"state": "ON", "mode": "AUTO"},
            "local_id": 101,
        }});
        let unit: VentilationUnit = decode_data(&body).unwrap();
        assert_eq!(unit.idx, 1);
        assert_eq!(unit.local_id, 101);
        let status = unit.status.unwrap();
        assert_eq!(status.state.as_deref(), Some("ON"));
        assert_eq!(status.mode.as_deref(), Some("AUTO"));
    }

    #[test]
    fn missing_data_field_is_a_typed_error() {
        let body = json!({"detail": "no"});
        assert!(decode_data::<VentilationUnit>(&body).is_err());
    }
}
