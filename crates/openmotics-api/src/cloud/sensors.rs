// Cloud sensor endpoints

use crate::client::Client;
use crate::cloud::client::CloudBackend;
use crate::cloud::models::{Sensor, decode_data};
use crate::error::Error;

/// Actions on an installation's sensors.
pub struct Sensors<'a> {
    client: &'a Client<CloudBackend>,
}

impl Client<CloudBackend> {
    pub fn sensors(&self) -> Sensors<'_> {
        Sensors { client: self }
    }
}

impl Sensors<'_> {
    /// All sensors.
    ///
    /// `GET /base/installations/{id}/sensors`
    pub async fn get_all(&self) -> Result<Vec<Sensor>, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!("/base/installations/{installation_id}/sensors"))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// A single sensor by id.
    ///
    /// `GET /base/installations/{id}/sensors/{sensor_id}`
    pub async fn get_by_id(&self, sensor_id: i64) -> Result<Sensor, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/sensors/{sensor_id}"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }
}
