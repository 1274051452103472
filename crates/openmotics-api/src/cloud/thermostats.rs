// Cloud thermostat endpoints
//
// Split into group and unit sub-accessors, matching the API's
// `/thermostats/groups` and `/thermostats/units` resources.

use crate::client::Client;
use crate::cloud::client::CloudBackend;
use crate::cloud::models::{ThermostatGroup, ThermostatUnit, decode_data};
use crate::error::Error;

/// Entry point to the thermostat group and unit accessors.
pub struct Thermostats<'a> {
    client: &'a Client<CloudBackend>,
}

impl Client<CloudBackend> {
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
    client: &'a Client<CloudBackend>,
}

impl ThermostatGroups<'_> {
    /// All thermostat groups.
    ///
    /// `GET /base/installations/{id}/thermostats/groups`
    pub async fn get_all(&self) -> Result<Vec<ThermostatGroup>, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/thermostats/groups"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// A single thermostat group by id.
    ///
    /// `GET /base/installations/{id}/thermostats/groups/{group_id}`
    pub async fn get_by_id(&self, group_id: i64) -> Result<ThermostatGroup, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/thermostats/groups/{group_id}"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }
}

/// Actions on individual thermostat units.
pub struct ThermostatUnits<'a> {
    client: &'a Client<CloudBackend>,
}

impl ThermostatUnits<'_> {
    /// All thermostat units.
    ///
    /// `GET /base/installations/{id}/thermostats/units`
    pub async fn get_all(&self) -> Result<Vec<ThermostatUnit>, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/thermostats/units"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// A single thermostat unit by id.
    ///
    /// `GET /base/installations/{id}/thermostats/units/{unit_id}`
    pub async fn get_by_id(&self, unit_id: i64) -> Result<ThermostatUnit, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/thermostats/units/{unit_id}"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }
}
