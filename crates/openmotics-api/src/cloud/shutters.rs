// Cloud shutter endpoints

use tracing::debug;

use crate::client::Client;
use crate::cloud::client::CloudBackend;
use crate::cloud::models::{Shutter, decode_data};
use crate::error::Error;

/// Actions on an installation's shutters.
pub struct Shutters<'a> {
    client: &'a Client<CloudBackend>,
}

impl Client<CloudBackend> {
    pub fn shutters(&self) -> Shutters<'_> {
        Shutters { client: self }
    }
}

impl Shutters<'_> {
    /// All shutters.
    ///
    /// `GET /base/installations/{id}/shutters`
    pub async fn get_all(&self) -> Result<Vec<Shutter>, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!("/base/installations/{installation_id}/shutters"))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// A single shutter by id.
    ///
    /// `GET /base/installations/{id}/shutters/{shutter_id}`
    pub async fn get_by_id(&self, shutter_id: i64) -> Result<Shutter, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/shutters/{shutter_id}"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// Raise a shutter.
    ///
    /// `POST /base/installations/{id}/shutters/{shutter_id}/up`
    pub async fn up(&self, shutter_id: i64) -> Result<(), Error> {
        self.command(shutter_id, "up").await
    }

    /// Lower a shutter.
    ///
    /// `POST /base/installations/{id}/shutters/{shutter_id}/down`
    pub async fn down(&self, shutter_id: i64) -> Result<(), Error> {
        self.command(shutter_id, "down").await
    }

    /// Stop a moving shutter.
    ///
    /// `POST /base/installations/{id}/shutters/{shutter_id}/stop`
    pub async fn stop(&self, shutter_id: i64) -> Result<(), Error> {
        self.command(shutter_id, "stop").await
    }

    async fn command(&self, shutter_id: i64, command: &str) -> Result<(), Error> {
        let installation_id = self.client.require_installation()?;
        debug!(shutter_id, command, "sending shutter command");
        self.client
            .post(
                &format!(
                    "/base/installations/{installation_id}/shutters/{shutter_id}/{command}"
                ),
                None,
            )
            .await?;
        Ok(())
    }
}
