// Cloud light endpoints

use serde_json::json;
use tracing::debug;

use crate::client::Client;
use crate::cloud::client::CloudBackend;
use crate::cloud::models::{Light, decode_data};
use crate::error::Error;

/// Actions on an installation's lights.
pub struct Lights<'a> {
    client: &'a Client<CloudBackend>,
}

impl Client<CloudBackend> {
    pub fn lights(&self) -> Lights<'_> {
        Lights { client: self }
    }
}

impl Lights<'_> {
    /// All lights.
    ///
    /// `GET /base/installations/{id}/lights`
    pub async fn get_all(&self) -> Result<Vec<Light>, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!("/base/installations/{installation_id}/lights"))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// A single light by id.
    ///
    /// `GET /base/installations/{id}/lights/{light_id}`
    pub async fn get_by_id(&self, light_id: i64) -> Result<Light, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/lights/{light_id}"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// Flip a light's state.
    pub async fn toggle(&self, light_id: i64) -> Result<(), Error> {
        let installation_id = self.client.require_installation()?;
        debug!(light_id, "toggling light");
        self.client
            .post(
                &format!("/base/installations/{installation_id}/lights/{light_id}/toggle"),
                None,
            )
            .await?;
        Ok(())
    }

    /// Turn a light on, optionally at a dimmer level (0-100, clamped).
    pub async fn turn_on(&self, light_id: i64, value: Option<i64>) -> Result<(), Error> {
        let installation_id = self.client.require_installation()?;
        let payload = value.map(|value| json!({"value": value.clamp(0, 100)}));
        debug!(light_id, "turning light on");
        self.client
            .post(
                &format!("/base/installations/{installation_id}/lights/{light_id}/turn_on"),
                payload.as_ref(),
            )
            .await?;
        Ok(())
    }

    /// Turn a light off.
    pub async fn turn_off(&self, light_id: i64) -> Result<(), Error> {
        let installation_id = self.client.require_installation()?;
        debug!(light_id, "turning light off");
        self.client
            .post(
                &format!("/base/installations/{installation_id}/lights/{light_id}/turn_off"),
                None,
            )
            .await?;
        Ok(())
    }
}
