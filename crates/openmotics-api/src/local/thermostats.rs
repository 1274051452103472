// Local gateway thermostat endpoints
//
// Split into group and unit sub-accessors, mirroring the gateway's own
// `get_thermostat_group_configurations` / `get_thermostat_configurations`
// shape.

use serde_json::json;
use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::local::client::LocalBackend;
use crate::local::models::{
    ThermostatGroup, ThermostatUnit, decode_flat_list, envelope_list, merge_status_by_id,
};

/// Entry point to the thermostat group and unit accessors.
pub struct Thermostats<'a> {
    client: &'a Client<LocalBackend>,
}

impl Client<LocalBackend> {
    pub fn thermostats(&self) -> Thermostats<'_> {
        Thermostats { client: self }
    }
}

impl<'a> Thermostats<'a> {
    pub fn groups(&self) -> ThermostatGroups<'a> {
        ThermostatGroups {
            client: self.client,
        }
    }

    pub fn units(&self) -> ThermostatUnits<'a> {
        ThermostatUnits {
            client: self.client,
        }
    }
}

/// Actions on thermostat groups.
pub struct ThermostatGroups<'a> {
    client: &'a Client<LocalBackend>,
}

impl ThermostatGroups<'_> {
    /// All thermostat groups.
    pub async fn get_all(&self) -> Result<Vec<ThermostatGroup>, Error> {
        let configs = self
            .client
            .exec_action("get_thermostat_group_configurations", None)
            .await?
            .into_json()?;
        decode_flat_list(envelope_list(&configs, "config")?)
    }

    /// A single thermostat group by id. Returns `None` if none matches.
    pub async fn get_by_id(&self, group_id: i64) -> Result<Option<ThermostatGroup>, Error> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .find(|group| group.idx == group_id))
    }
}

/// Actions on individual thermostat units.
pub struct ThermostatUnits<'a> {
    client: &'a Client<LocalBackend>,
}

impl ThermostatUnits<'_> {
    /// All thermostat units, with live status folded in.
    pub async fn get_all(&self) -> Result<Vec<ThermostatUnit>, Error> {
        let configs = self
            .client
            .exec_action("get_thermostat_configurations", None)
            .await?
            .into_json()?;
        let status = self
            .client
            .exec_action("get_thermostat_status", None)
            .await?
            .into_json()?;

        let merged = merge_status_by_id(
            envelope_list(&configs, "config")?,
            &envelope_list(&status, "status")?,
        );
        decode_flat_list(merged)
    }

    /// A single thermostat unit by id. Returns `None` if none matches.
    pub async fn get_by_id(&self, unit_id: i64) -> Result<Option<ThermostatUnit>, Error> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .find(|unit| unit.idx == unit_id))
    }

    /// Change a unit's setpoint temperature.
    pub async fn set_setpoint(&self, unit_id: i64, temperature: f64) -> Result<(), Error> {
        debug!(unit_id, temperature, "setting thermostat setpoint");
        self.client
            .exec_action(
                "set_current_setpoint",
                Some(&json!({"thermostat": unit_id, "temperature": temperature})),
            )
            .await?;
        Ok(())
    }
}
