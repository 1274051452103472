// Cloud output endpoints
//
// All paths are scoped by the client's current installation id. Listing
// defaults to the `{"usage":"CONTROL"}` filter the cloud itself applies
// for controllable outputs.

use serde_json::json;
use tracing::debug;

use crate::client::Client;
use crate::cloud::client::CloudBackend;
use crate::cloud::models::{Output, decode_data};
use crate::error::Error;

const DEFAULT_FILTER: &str = r#"{"usage":"CONTROL"}"#;

/// Actions on an installation's outputs.
pub struct Outputs<'a> {
    client: &'a Client<CloudBackend>,
}

impl Client<CloudBackend> {
    pub fn outputs(&self) -> Outputs<'_> {
        Outputs { client: self }
    }
}

impl Outputs<'_> {
    /// All outputs, optionally with a custom JSON filter expression.
    ///
    /// `GET /base/installations/{id}/outputs?filter=...`
    pub async fn get_all(&self, output_filter: Option<&str>) -> Result<Vec<Output>, Error> {
        let installation_id = self.client.require_installation()?;
        let path = format!("/base/installations/{installation_id}/outputs");
        let filter = output_filter.unwrap_or(DEFAULT_FILTER);
        let body = self
            .client
            .get_with_params(&path, &[("filter", filter)])
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// A single output by id.
    ///
    /// `GET /base/installations/{id}/outputs/{output_id}`
    pub async fn get_by_id(&self, output_id: i64) -> Result<Output, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/outputs/{output_id}"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// Flip an output's state.
    ///
    /// `POST /base/installations/{id}/outputs/{output_id}/toggle`
    pub async fn toggle(&self, output_id: i64) -> Result<(), Error> {
        let installation_id = self.client.require_installation()?;
        debug!(output_id, "toggling output");
        self.client
            .post(
                &format!("/base/installations/{installation_id}/outputs/{output_id}/toggle"),
                None,
            )
            .await?;
        Ok(())
    }

    /// Turn an output on, optionally at a dimmer level (0-100, clamped).
    ///
    /// `POST /base/installations/{id}/outputs/{output_id}/turn_on`
    pub async fn turn_on(&self, output_id: i64, value: Option<i64>) -> Result<(), Error> {
        let installation_id = self.client.require_installation()?;
        let payload = value.map(|value| json!({"value": value.clamp(0, 100)}));
        debug!(output_id, "turning output on");
        self.client
            .post(
                &format!("/base/installations/{installation_id}/outputs/{output_id}/turn_on"),
                payload.as_ref(),
            )
            .await?;
        Ok(())
    }

    /// Turn one output off, or all of them when `output_id` is `None`.
    ///
    /// `POST /base/installations/{id}/outputs[/{output_id}]/turn_off`
    pub async fn turn_off(&self, output_id: Option<i64>) -> Result<(), Error> {
        let installation_id = self.client.require_installation()?;
        let path = match output_id {
            Some(output_id) => {
                format!("/base/installations/{installation_id}/outputs/{output_id}/turn_off")
            }
            None => format!("/base/installations/{installation_id}/outputs/turn_off"),
        };
        debug!(?output_id, "turning output(s) off");
        self.client.post(&path, None).await?;
        Ok(())
    }
}
