// Gateway record models
//
// The local gateway returns each record as one flat JSON object; there is
// no real nested payload. Every model deserializes through a `Flat…` raw
// record and fans the flat fields out into nested `Location`/status
// structs client-side (`#[serde(from = "…")]`). Conventions of the wire
// format: `local_id` defaults to `id`, `status == 1` means on, dimmer
// levels arrive as `dimmer`, the room number as `room`.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

// ── Envelope helpers ─────────────────────────────────────────────────

/// Extract a named list from a gateway action envelope, e.g. the
/// `config` list of `{"success": true, "config": [...]}`.
pub(crate) fn envelope_list(body: &Value, field: &str) -> Result<Vec<Value>, Error> {
    body.get(field)
        .and_then(Value::as_array)
        .cloned()
        .ok_or_else(|| Error::Deserialization {
            message: format!("gateway response is missing the `{field}` list"),
            body: body.to_string(),
        })
}

/// Fold live status records into configuration records by `id`.
///
/// The gateway returns configuration and status as two parallel lists;
/// the status fields are merged into the flat config object before the
/// record is decoded.
pub(crate) fn merge_status_by_id(mut configs: Vec<Value>, statuses: &[Value]) -> Vec<Value> {
    let by_id: HashMap<i64, &serde_json::Map<String, Value>> = statuses
        .iter()
        .filter_map(|status| {
            let map = status.as_object()?;
            let id = map.get("id")?.as_i64()?;
            Some((id, map))
        })
        .collect();

    for config in &mut configs {
        let Some(map) = config.as_object_mut() else {
            continue;
        };
        let Some(id) = map.get("id").and_then(Value::as_i64) else {
            continue;
        };
        if let Some(status) = by_id.get(&id) {
            for (key, value) in *status {
                map.insert(key.clone(), value.clone());
            }
        }
    }
    configs
}

pub(crate) fn decode_flat<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value.clone()).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body: value.to_string(),
    })
}

pub(crate) fn decode_flat_list<T: DeserializeOwned>(values: Vec<Value>) -> Result<Vec<T>, Error> {
    values.into_iter().map(decode_flat).collect()
}

// ── Location ─────────────────────────────────────────────────────────

/// Physical placement of a record, fanned out from the flat wire fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub installation_id: i64,
    pub gateway_id: i64,
    pub floor_id: i64,
    pub room_id: i64,
    pub floor_coordinates: Option<FloorCoordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorCoordinates {
    pub x: i64,
    pub y: i64,
}

fn location_from_room(room: Option<i64>) -> Location {
    Location {
        room_id: room.unwrap_or_default(),
        ..Location::default()
    }
}

// ── Output ───────────────────────────────────────────────────────────

/// A relay or dimmer output on the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatOutput")]
pub struct Output {
    pub idx: i64,
    pub local_id: i64,
    pub name: String,
    pub location: Location,
    pub capabilities: Vec<String>,
    pub status: OutputStatus,
    pub last_state_change: f64,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutputStatus {
    pub on: bool,
    pub locked: bool,
    pub value: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct FlatOutput {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    local_id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    room: Option<i64>,
    #[serde(default)]
    module_type: Option<String>,
    #[serde(default)]
    status: Option<i64>,
    #[serde(default)]
    dimmer: Option<i64>,
    #[serde(default)]
    locked: Option<bool>,
    #[serde(default)]
    last_state_change: Option<f64>,
    #[serde(default)]
    version: Option<String>,
}

/// Dimmer modules report module type `D`; their outputs support ranges.
fn output_capabilities(module_type: Option<&str>) -> Vec<String> {
    let mut capabilities = vec!["ON_OFF".to_owned()];
    if module_type == Some("D") {
        capabilities.push("RANGE".to_owned());
    }
    capabilities
}

impl From<FlatOutput> for Output {
    fn from(raw: FlatOutput) -> Self {
        Self {
            idx: raw.id,
            local_id: raw.local_id.unwrap_or(raw.id),
            name: raw.name,
            location: location_from_room(raw.room),
            capabilities: output_capabilities(raw.module_type.as_deref()),
            status: OutputStatus {
                on: raw.status == Some(1),
                locked: raw.locked.unwrap_or_default(),
                value: raw.dimmer.unwrap_or_default(),
            },
            last_state_change: raw.last_state_change.unwrap_or_default(),
            version: raw.version.unwrap_or_default(),
        }
    }
}

// ── Light ────────────────────────────────────────────────────────────

/// A light, as exposed by the gateway's output modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatLight")]
pub struct Light {
    pub idx: i64,
    pub local_id: i64,
    pub name: String,
    pub location: Location,
    pub capabilities: Vec<String>,
    pub status: LightStatus,
    pub last_state_change: f64,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LightStatus {
    pub on: bool,
    pub locked: bool,
    pub manual_override: bool,
    pub value: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct FlatLight {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    local_id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    room: Option<i64>,
    #[serde(default)]
    module_type: Option<String>,
    #[serde(default)]
    status: Option<i64>,
    #[serde(default)]
    dimmer: Option<i64>,
    #[serde(default)]
    locked: Option<bool>,
    #[serde(default)]
    manual_override: Option<bool>,
    #[serde(default)]
    last_state_change: Option<f64>,
    #[serde(default)]
    version: Option<String>,
}

impl From<FlatLight> for Light {
    fn from(raw: FlatLight) -> Self {
        Self {
            idx: raw.id,
            local_id: raw.local_id.unwrap_or(raw.id),
            name: raw.name,
            location: location_from_room(raw.room),
            capabilities: output_capabilities(raw.module_type.as_deref()),
            status: LightStatus {
                on: raw.status == Some(1),
                locked: raw.locked.unwrap_or_default(),
                manual_override: raw.manual_override.unwrap_or_default(),
                value: raw.dimmer.unwrap_or_default(),
            },
            last_state_change: raw.last_state_change.unwrap_or_default(),
            version: raw.version.unwrap_or_default(),
        }
    }
}

// ── Input ────────────────────────────────────────────────────────────

/// A push button or other input on the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatInput")]
pub struct Input {
    pub idx: i64,
    pub local_id: i64,
    pub name: String,
    pub location: Location,
    pub status: InputStatus,
    pub last_state_change: f64,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputStatus {
    pub on: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct FlatInput {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    local_id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    room: Option<i64>,
    #[serde(default)]
    status: Option<i64>,
    #[serde(default)]
    last_state_change: Option<f64>,
    #[serde(default)]
    version: Option<String>,
}

impl From<FlatInput> for Input {
    fn from(raw: FlatInput) -> Self {
        Self {
            idx: raw.id,
            local_id: raw.local_id.unwrap_or(raw.id),
            name: raw.name,
            location: location_from_room(raw.room),
            status: InputStatus {
                on: raw.status == Some(1),
            },
            last_state_change: raw.last_state_change.unwrap_or_default(),
            version: raw.version.unwrap_or_default(),
        }
    }
}

// ── Sensor ───────────────────────────────────────────────────────────

/// An environmental sensor. The accessor folds the gateway's separate
/// temperature/humidity/brightness status lists into the flat record
/// before decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatSensor")]
pub struct Sensor {
    pub idx: i64,
    pub local_id: i64,
    pub name: String,
    pub location: Location,
    pub physical_quantity: String,
    pub status: SensorStatus,
    pub last_state_change: f64,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SensorStatus {
    pub humidity: f64,
    pub temperature: f64,
    pub brightness: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct FlatSensor {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    local_id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    room: Option<i64>,
    #[serde(default)]
    physical_quantity: Option<String>,
    #[serde(default)]
    temperature: Option<f64>,
    #[serde(default)]
    humidity: Option<f64>,
    #[serde(default)]
    brightness: Option<f64>,
    #[serde(default)]
    last_state_change: Option<f64>,
    #[serde(default)]
    version: Option<String>,
}

impl From<FlatSensor> for Sensor {
    fn from(raw: FlatSensor) -> Self {
        Self {
            idx: raw.id,
            local_id: raw.local_id.unwrap_or(raw.id),
            name: raw.name,
            location: location_from_room(raw.room),
            physical_quantity: raw.physical_quantity.unwrap_or_default(),
            status: SensorStatus {
                humidity: raw.humidity.unwrap_or_default(),
                temperature: raw.temperature.unwrap_or_default(),
                brightness: raw.brightness.unwrap_or_default(),
            },
            last_state_change: raw.last_state_change.unwrap_or_default(),
            version: raw.version.unwrap_or_default(),
        }
    }
}

// ── Shutter ──────────────────────────────────────────────────────────

/// A shutter or blind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatShutter")]
pub struct Shutter {
    pub idx: i64,
    pub local_id: i64,
    pub name: String,
    pub shutter_type: String,
    pub location: Location,
    pub capabilities: Vec<String>,
    pub attributes: ShutterAttributes,
    pub metadata: ShutterMetadata,
    pub status: ShutterStatus,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShutterAttributes {
    pub azimuth: Option<String>,
    pub compass_point: Option<String>,
    pub surface_area: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShutterMetadata {
    pub protocol: Option<String>,
    pub controllable_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShutterStatus {
    pub state: String,
    pub position: i64,
    pub locked: bool,
    pub manual_override: bool,
    pub last_change: f64,
    pub preset_position: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct FlatShutter {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    local_id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "type")]
    shutter_type: Option<String>,
    #[serde(default)]
    room: Option<i64>,
    #[serde(default)]
    azimuth: Option<String>,
    #[serde(default)]
    compass_point: Option<String>,
    #[serde(default)]
    surface_area: Option<String>,
    #[serde(default)]
    protocol: Option<String>,
    #[serde(default)]
    controllable_name: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    position: Option<i64>,
    #[serde(default)]
    locked: Option<bool>,
    #[serde(default)]
    manual_override: Option<bool>,
    #[serde(default)]
    last_change: Option<f64>,
    #[serde(default)]
    preset_position: Option<i64>,
    #[serde(default)]
    version: Option<String>,
}

impl From<FlatShutter> for Shutter {
    fn from(raw: FlatShutter) -> Self {
        Self {
            idx: raw.id,
            local_id: raw.local_id.unwrap_or(raw.id),
            name: raw.name,
            shutter_type: raw.shutter_type.unwrap_or_default(),
            location: location_from_room(raw.room),
            capabilities: Vec::new(),
            attributes: ShutterAttributes {
                azimuth: raw.azimuth,
                compass_point: raw.compass_point,
                surface_area: raw.surface_area,
            },
            metadata: ShutterMetadata {
                protocol: raw.protocol,
                controllable_name: raw.controllable_name,
            },
            status: ShutterStatus {
                state: raw.state.unwrap_or_default(),
                position: raw.position.unwrap_or_default(),
                locked: raw.locked.unwrap_or_default(),
                manual_override: raw.manual_override.unwrap_or_default(),
                last_change: raw.last_change.unwrap_or_default(),
                preset_position: raw.preset_position.unwrap_or_default(),
            },
            version: raw.version.unwrap_or_default(),
        }
    }
}

// ── Group action ─────────────────────────────────────────────────────

/// A scene-like list of gateway actions triggered as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatGroupAction")]
pub struct GroupAction {
    pub idx: i64,
    pub local_id: i64,
    pub name: String,
    pub location: Location,
    pub actions: Vec<Value>,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
struct FlatGroupAction {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    local_id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    room: Option<i64>,
    #[serde(default)]
    actions: Option<Value>,
    #[serde(default)]
    version: Option<String>,
}

impl From<FlatGroupAction> for GroupAction {
    fn from(raw: FlatGroupAction) -> Self {
        // Older firmwares return the action list as one CSV string.
        let actions = match raw.actions {
            Some(Value::Array(actions)) => actions,
            Some(other) => vec![other],
            None => Vec::new(),
        };
        Self {
            idx: raw.id,
            local_id: raw.local_id.unwrap_or(raw.id),
            name: raw.name,
            location: location_from_room(raw.room),
            actions,
            version: raw.version.unwrap_or_default(),
        }
    }
}

// ── Energy sensor ────────────────────────────────────────────────────

/// A power-metering input. Realtime readings arrive as a 4-element list
/// `[voltage, frequency, current, power]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatEnergySensor")]
pub struct EnergySensor {
    pub idx: i64,
    pub local_id: i64,
    pub name: String,
    pub inverted: bool,
    pub status: EnergyStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnergyStatus {
    pub voltage: f64,
    pub frequency: f64,
    pub current: f64,
    pub power: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct FlatEnergySensor {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    local_id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    inverted: Option<bool>,
    #[serde(default)]
    status: Option<Vec<f64>>,
}

impl From<FlatEnergySensor> for EnergySensor {
    fn from(raw: FlatEnergySensor) -> Self {
        let readings = raw.status.unwrap_or_default();
        let reading = |index: usize| readings.get(index).copied().unwrap_or_default();
        Self {
            idx: raw.id,
            local_id: raw.local_id.unwrap_or(raw.id),
            name: raw.name,
            inverted: raw.inverted.unwrap_or_default(),
            status: EnergyStatus {
                voltage: reading(0),
                frequency: reading(1),
                current: reading(2),
                power: reading(3),
            },
        }
    }
}

// ── Thermostats ──────────────────────────────────────────────────────

/// A thermostat group (heating/cooling cluster).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatThermostatGroup")]
pub struct ThermostatGroup {
    pub idx: i64,
    pub local_id: i64,
    pub name: String,
    pub thermostat_ids: Vec<i64>,
    pub status: ThermostatGroupStatus,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThermostatGroupStatus {
    pub mode: String,
    pub state: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct FlatThermostatGroup {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    local_id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    thermostat_ids: Option<Vec<i64>>,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    state: Option<bool>,
    #[serde(default)]
    version: Option<String>,
}

impl From<FlatThermostatGroup> for ThermostatGroup {
    fn from(raw: FlatThermostatGroup) -> Self {
        Self {
            idx: raw.id,
            local_id: raw.local_id.unwrap_or(raw.id),
            name: raw.name,
            thermostat_ids: raw.thermostat_ids.unwrap_or_default(),
            status: ThermostatGroupStatus {
                mode: raw.mode.unwrap_or_default(),
                state: raw.state.unwrap_or_default(),
            },
            version: raw.version.unwrap_or_default(),
        }
    }
}

/// A single thermostat unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatThermostatUnit")]
pub struct ThermostatUnit {
    pub idx: i64,
    pub local_id: i64,
    pub name: String,
    pub location: ThermostatLocation,
    pub status: ThermostatUnitStatus,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThermostatLocation {
    pub thermostat_group_id: i64,
    pub installation_id: i64,
    pub room_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThermostatUnitStatus {
    pub actual_temperature: f64,
    pub current_setpoint: f64,
    pub output_0: f64,
    pub output_1: f64,
    pub preset: String,
}

#[derive(Debug, Clone, Deserialize)]
struct FlatThermostatUnit {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    local_id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    room: Option<i64>,
    #[serde(default)]
    thermostat_group_id: Option<i64>,
    #[serde(default, alias = "act")]
    actual_temperature: Option<f64>,
    #[serde(default, alias = "csetp", alias = "setpoint_temperature")]
    current_setpoint: Option<f64>,
    #[serde(default, alias = "output0")]
    output_0: Option<f64>,
    #[serde(default, alias = "output1")]
    output_1: Option<f64>,
    #[serde(default)]
    preset: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

impl From<FlatThermostatUnit> for ThermostatUnit {
    fn from(raw: FlatThermostatUnit) -> Self {
        Self {
            idx: raw.id,
            local_id: raw.local_id.unwrap_or(raw.id),
            name: raw.name,
            location: ThermostatLocation {
                thermostat_group_id: raw.thermostat_group_id.unwrap_or_default(),
                installation_id: 0,
                room_id: raw.room.unwrap_or_default(),
            },
            status: ThermostatUnitStatus {
                actual_temperature: raw.actual_temperature.unwrap_or_default(),
                current_setpoint: raw.current_setpoint.unwrap_or_default(),
                output_0: raw.output_0.unwrap_or_default(),
                output_1: raw.output_1.unwrap_or_default(),
                preset: raw.preset.unwrap_or_default(),
            },
            version: raw.version.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{
        EnergySensor, GroupAction, Input, Light, Output, Sensor, Shutter, ThermostatUnit,
        envelope_list, merge_status_by_id,
    };

    #[test]
    fn flat_input_record_fans_out() {
        let input: Input =
            serde_json::from_value(json!({"id": 5, "name": "Kitchen", "room": 2, "status": 1}))
                .unwrap();
        assert_eq!(input.idx, 5);
        assert_eq!(input.local_id, 5);
        assert_eq!(input.name, "Kitchen");
        assert_eq!(input.location.room_id, 2);
        assert!(input.status.on);
    }

    #[test]
    fn explicit_local_id_is_preserved() {
        let input: Input =
            serde_json::from_value(json!({"id": 5, "local_id": 101, "name": "Hall"})).unwrap();
        assert_eq!(input.idx, 5);
        assert_eq!(input.local_id, 101);
        assert!(!input.status.on);
    }

    #[test]
    fn output_status_comes_from_merged_fields() {
        let output: Output = serde_json::from_value(json!({
            "id": 3,
            "name": "Ceiling",
            "room": 7,
            "status": 1,
            "dimmer": 63,
            "module_type": "D",
        }))
        .unwrap();
        assert!(output.status.on);
        assert_eq!(output.status.value, 63);
        assert_eq!(output.location.room_id, 7);
        assert_eq!(output.capabilities, vec!["ON_OFF", "RANGE"]);
    }

    #[test]
    fn non_dimmer_light_has_on_off_only() {
        let light: Light =
            serde_json::from_value(json!({"id": 1, "name": "Spot", "module_type": "O"})).unwrap();
        assert_eq!(light.capabilities, vec!["ON_OFF"]);
        assert!(!light.status.on);
    }

    #[test]
    fn sensor_status_fields_merge_from_flat_record() {
        let sensor: Sensor = serde_json::from_value(json!({
            "id": 4,
            "name": "Living",
            "physical_quantity": "temperature",
            "temperature": 21.5,
            "humidity": 48.0,
        }))
        .unwrap();
        assert_eq!(sensor.physical_quantity, "temperature");
        assert_eq!(sensor.status.temperature, 21.5);
        assert_eq!(sensor.status.humidity, 48.0);
        assert_eq!(sensor.status.brightness, 0.0);
    }

    #[test]
    fn shutter_fans_out_attributes_and_status() {
        let shutter: Shutter = serde_json::from_value(json!({
            "id": 2,
            "name": "South window",
            "type": "venetian",
            "state": "going_up",
            "position": 40,
            "compass_point": "S",
        }))
        .unwrap();
        assert_eq!(shutter.shutter_type, "venetian");
        assert_eq!(shutter.status.state, "going_up");
        assert_eq!(shutter.status.position, 40);
        assert_eq!(shutter.attributes.compass_point.as_deref(), Some("S"));
        assert_eq!(shutter.metadata.protocol, None);
    }

    #[test]
    fn group_action_csv_string_is_kept_whole() {
        let action: GroupAction =
            serde_json::from_value(json!({"id": 0, "name": "All off", "actions": "240,0"}))
                .unwrap();
        assert_eq!(action.actions, vec![json!("240,0")]);
    }

    #[test]
    fn energy_status_comes_from_reading_tuple() {
        let sensor: EnergySensor = serde_json::from_value(json!({
            "id": 9,
            "name": "Mains",
            "status": [231.0, 50.0, 2.5, 575.0],
        }))
        .unwrap();
        assert_eq!(sensor.status.voltage, 231.0);
        assert_eq!(sensor.status.frequency, 50.0);
        assert_eq!(sensor.status.current, 2.5);
        assert_eq!(sensor.status.power, 575.0);
    }

    #[test]
    fn thermostat_unit_accepts_short_status_keys() {
        let unit: ThermostatUnit = serde_json::from_value(json!({
            "id": 0,
            "name": "Ground floor",
            "room": 1,
            "act": 21.0,
            "csetp": 20.5,
            "preset": "AUTO",
        }))
        .unwrap();
        assert_eq!(unit.status.actual_temperature, 21.0);
        assert_eq!(unit.status.current_setpoint, 20.5);
        assert_eq!(unit.status.preset, "AUTO");
        assert_eq!(unit.location.room_id, 1);
    }

    #[test]
    fn merge_folds_status_records_into_configs() {
        let configs = vec![json!({"id": 0, "name": "a"}), json!({"id": 1, "name": "b"})];
        let statuses = vec![json!({"id": 1, "status": 1, "dimmer": 80})];
        let merged = merge_status_by_id(configs, &statuses);
        assert_eq!(merged[0].get("status"), None);
        assert_eq!(merged[1].get("status"), Some(&json!(1)));
        assert_eq!(merged[1].get("dimmer"), Some(&json!(80)));
    }

    #[test]
    fn envelope_list_requires_the_field() {
        let body = json!({"success": true, "config": [{"id": 0}]});
        assert_eq!(envelope_list(&body, "config").unwrap().len(), 1);
        assert!(envelope_list(&body, "status").is_err());
    }
}
