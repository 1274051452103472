// Local gateway group action endpoints

use serde_json::json;
use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::local::client::LocalBackend;
use crate::local::models::{GroupAction, decode_flat_list, envelope_list};

/// Actions on the gateway's group actions (scenes).
pub struct GroupActions<'a> {
    client: &'a Client<LocalBackend>,
}

impl Client<LocalBackend> {
    pub fn groupactions(&self) -> GroupActions<'_> {
        GroupActions { client: self }
    }
}

impl GroupActions<'_> {
    /// All configured group actions.
    pub async fn get_all(&self) -> Result<Vec<GroupAction>, Error> {
        let configs = self
            .client
            .exec_action("get_group_action_configurations", None)
            .await?
            .into_json()?;
        decode_flat_list(envelope_list(&configs, "config")?)
    }

    /// A single group action by id. Returns `None` if none matches.
    pub async fn get_by_id(&self, groupaction_id: i64) -> Result<Option<GroupAction>, Error> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .find(|action| action.idx == groupaction_id))
    }

    /// Trigger a group action.
    pub async fn trigger(&self, groupaction_id: i64) -> Result<(), Error> {
        debug!(groupaction_id, "triggering group action");
        self.client
            .exec_action(
                "do_group_action",
                Some(&json!({"group_action_id": groupaction_id})),
            )
            .await?;
        Ok(())
    }
}
