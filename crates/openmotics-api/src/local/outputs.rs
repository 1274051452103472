// Local gateway output endpoints
//
// Configuration comes from `get_output_configurations`, live state from
// `get_output_status`; the two lists are folded together by id before
// decoding. Commands go through `set_output`.

use serde_json::json;
use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::local::client::LocalBackend;
use crate::local::models::{Output, decode_flat_list, envelope_list, merge_status_by_id};

/// Actions on the gateway's outputs.
pub struct Outputs<'a> {
    client: &'a Client<LocalBackend>,
}

impl Client<LocalBackend> {
    pub fn outputs(&self) -> Outputs<'_> {
        Outputs { client: self }
    }
}

impl Outputs<'_> {
    /// All outputs, with live status folded in.
    pub async fn get_all(&self) -> Result<Vec<Output>, Error> {
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

    /// A single output by id. Returns `None` if no output matches.
    pub async fn get_by_id(&self, output_id: i64) -> Result<Option<Output>, Error> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .find(|output| output.idx == output_id))
    }

    /// Turn an output on, optionally at a dimmer level (0-100, clamped).
    pub async fn turn_on(&self, output_id: i64, value: Option<i64>) -> Result<(), Error> {
        let mut body = json!({"id": output_id, "is_on": true});
        if let Some(value) = value {
            body["dimmer"] = json!(value.clamp(0, 100));
        }
        debug!(output_id, "turning output on");
        self.client.exec_action("set_output", Some(&body)).await?;
        Ok(())
    }

    /// Turn an output off.
    pub async fn turn_off(&self, output_id: i64) -> Result<(), Error> {
        debug!(output_id, "turning output off");
        self.client
            .exec_action("set_output", Some(&json!({"id": output_id, "is_on": false})))
            .await?;
        Ok(())
    }

    /// Flip an output's current state.
    pub async fn toggle(&self, output_id: i64) -> Result<(), Error> {
        let Some(output) = self.get_by_id(output_id).await? else {
            return Err(Error::Connection {
                message: format!("output {output_id} not found"),
                status: None,
            });
        };
        if output.status.on {
            self.turn_off(output_id).await
        } else {
            self.turn_on(output_id, None).await
        }
    }
}
