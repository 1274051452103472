// Cloud group action endpoints

use tracing::debug;

use crate::client::Client;
use crate::cloud::client::CloudBackend;
use crate::cloud::models::{GroupAction, decode_data};
use crate::error::Error;

/// Actions on an installation's group actions (scenes).
pub struct GroupActions<'a> {
    client: &'a Client<CloudBackend>,
}

impl Client<CloudBackend> {
    pub fn groupactions(&self) -> GroupActions<'_> {
        GroupActions { client: self }
    }
}

impl GroupActions<'_> {
    /// All group actions.
    ///
    /// `GET /base/installations/{id}/groupactions`
    pub async fn get_all(&self) -> Result<Vec<GroupAction>, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/groupactions"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// A single group action by id.
    ///
    /// `GET /base/installations/{id}/groupactions/{groupaction_id}`
    pub async fn get_by_id(&self, groupaction_id: i64) -> Result<GroupAction, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/groupactions/{groupaction_id}"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// Trigger a group action.
    ///
    /// `POST /base/installations/{id}/groupactions/{groupaction_id}/trigger`
    pub async fn trigger(&self, groupaction_id: i64) -> Result<(), Error> {
        let installation_id = self.client.require_installation()?;
        debug!(groupaction_id, "triggering group action");
        self.client
            .post(
                &format!(
                    "/base/installations/{installation_id}/groupactions/{groupaction_id}/trigger"
                ),
                None,
            )
            .await?;
        Ok(())
    }
}
