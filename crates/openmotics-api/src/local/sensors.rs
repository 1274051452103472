// Local gateway sensor endpoints
//
// The gateway reports temperature, humidity, and brightness as three
// separate status lists indexed by sensor id. The accessor folds the
// readings into each flat config record before decoding.

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::local::client::LocalBackend;
use crate::local::models::{Sensor, decode_flat_list, envelope_list};

/// Actions on the gateway's sensors.
pub struct Sensors<'a> {
    client: &'a Client<LocalBackend>,
}

impl Client<LocalBackend> {
    pub fn sensors(&self) -> Sensors<'_> {
        Sensors { client: self }
    }
}

impl Sensors<'_> {
    /// All sensors, with the latest readings folded in.
    pub async fn get_all(&self) -> Result<Vec<Sensor>, Error> {
        let configs = self
            .client
            .exec_action("get_sensor_configurations", None)
            .await?
            .into_json()?;
        let temperature = self.status_list("get_sensor_temperature_status").await?;
        let humidity = self.status_list("get_sensor_humidity_status").await?;
        let brightness = self.status_list("get_sensor_brightness_status").await?;

        let mut records = envelope_list(&configs, "config")?;
        for record in &mut records {
            let Some(map) = record.as_object_mut() else {
                continue;
            };
            let Some(id) = map.get("id").and_then(Value::as_i64) else {
                continue;
            };
            let Ok(index) = usize::try_from(id) else {
                continue;
            };
            for (key, readings) in [
                ("temperature", &temperature),
                ("humidity", &humidity),
                ("brightness", &brightness),
            ] {
                if let Some(reading) = readings.get(index).filter(|v| !v.is_null()) {
                    map.insert(key.to_owned(), reading.clone());
                }
            }
        }
        decode_flat_list(records)
    }

    /// A single sensor by id. Returns `None` if no sensor matches.
    pub async fn get_by_id(&self, sensor_id: i64) -> Result<Option<Sensor>, Error> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .find(|sensor| sensor.idx == sensor_id))
    }

    /// One reading list, indexed by sensor id (`null` for no reading).
    async fn status_list(&self, action: &str) -> Result<Vec<Value>, Error> {
        let body = self.client.exec_action(action, None).await?.into_json()?;
        envelope_list(&body, "status")
    }
}
