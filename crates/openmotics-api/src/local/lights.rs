// Local gateway light endpoints
//
// The gateway has no dedicated light API; lights are outputs. This view
// decodes the merged output records as lights (dimmer modules gain the
// RANGE capability) and drives them through `set_output`.

use serde_json::json;
use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::local::client::LocalBackend;
use crate::local::models::{Light, decode_flat_list, envelope_list, merge_status_by_id};

/// Actions on the gateway's lights.
pub struct Lights<'a> {
    client: &'a Client<LocalBackend>,
}

impl Client<LocalBackend> {
    pub fn lights(&self) -> Lights<'_> {
        Lights { client: self }
    }
}

impl Lights<'_> {
    /// All lights, with live status folded in.
    pub async fn get_all(&self) -> Result<Vec<Light>, Error> {
        let configs = self
            .client
            .exec_action("get_output_configurations", None)
            .await?
            .into_json()?;
        let status = self
            .client
            .exec_action("get_output_status", None)
            .await?
            .into_json()?;

        let merged = merge_status_by_id(
            envelope_list(&configs, "config")?,
            &envelope_list(&status, "status")?,
        );
        decode_flat_list(merged)
    }

    /// A single light by id. Returns `None` if no light matches.
    pub async fn get_by_id(&self, light_id: i64) -> Result<Option<Light>, Error> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .find(|light| light.idx == light_id))
    }

    /// Turn a light on, optionally at a dimmer level (0-100, clamped).
    pub async fn turn_on(&self, light_id: i64, value: Option<i64>) -> Result<(), Error> {
        let mut body = json!({"id": light_id, "is_on": true});
        if let Some(value) = value {
            body["dimmer"] = json!(value.clamp(0, 100));
        }
        debug!(light_id, "turning light on");
        self.client.exec_action("set_output", Some(&body)).await?;
        Ok(())
    }

    /// Turn a light off.
    pub async fn turn_off(&self, light_id: i64) -> Result<(), Error> {
        debug!(light_id, "turning light off");
        self.client
            .exec_action("set_output", Some(&json!({"id": light_id, "is_on": false})))
            .await?;
        Ok(())
    }

    /// Flip a light's current state.
    pub async fn toggle(&self, light_id: i64) -> Result<(), Error> {
        let Some(light) = self.get_by_id(light_id).await? else {
            return Err(Error::Connection {
                message: format!("light {light_id} not found"),
                status: None,
            });
        };
        if light.status.on {
            self.turn_off(light_id).await
        } else {
            self.turn_on(light_id, None).await
        }
    }
}
