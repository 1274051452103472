// Cloud energy endpoints
//
// The cloud API has no energy resource; this accessor exists to keep the
// surface on par with the local gateway and always returns an empty list.

use crate::client::Client;
use crate::cloud::client::CloudBackend;
use crate::cloud::models::EnergySensor;
use crate::error::Error;

/// Actions on an installation's energy sensors.
pub struct EnergySensors<'a> {
    client: &'a Client<CloudBackend>,
}

impl Client<CloudBackend> {
    pub fn energysensors(&self) -> EnergySensors<'_> {
        EnergySensors { client: self }
    }
}

impl EnergySensors<'_> {
    /// Always empty: the cloud exposes no energy endpoint.
    pub async fn get_all(&self) -> Result<Vec<EnergySensor>, Error> {
        self.client.require_installation()?;
        Ok(Vec::new())
    }
}
