// Local gateway energy endpoints
//
// Power modules come from `get_power_modules`; realtime readings from
// `get_realtime_power` as 4-element tuples (voltage, frequency, current,
// power).

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::http::ResponseBody;
use crate::local::client::LocalBackend;
use crate::local::models::{EnergySensor, decode_flat_list, envelope_list};

/// Actions on the gateway's energy sensors.
pub struct EnergySensors<'a> {
    client: &'a Client<LocalBackend>,
}

impl Client<LocalBackend> {
    pub fn energysensors(&self) -> EnergySensors<'_> {
        EnergySensors { client: self }
    }
}

impl EnergySensors<'_> {
    /// All power-metering modules.
    pub async fn get_all(&self) -> Result<Vec<EnergySensor>, Error> {
        let body = self
            .client
            .exec_action("get_power_modules", None)
            .await?
            .into_json()?;
        decode_flat_list(envelope_list(&body, "modules")?)
    }

    /// A single energy sensor by id. Returns `None` if none matches.
    pub async fn get_by_id(&self, sensor_id: i64) -> Result<Option<EnergySensor>, Error> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .find(|sensor| sensor.idx == sensor_id))
    }

    /// Raw realtime power readings, keyed by module id.
    pub async fn realtime_power(&self) -> Result<Value, Error> {
        let body: ResponseBody = self.client.exec_action("get_realtime_power", None).await?;
        body.into_json()
    }
}
