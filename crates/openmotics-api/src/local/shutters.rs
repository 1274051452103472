// Local gateway shutter endpoints

use serde_json::json;
use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::local::client::LocalBackend;
use crate::local::models::{Shutter, decode_flat_list, envelope_list, merge_status_by_id};

/// Actions on the gateway's shutters.
pub struct Shutters<'a> {
    client: &'a Client<LocalBackend>,
}

impl Client<LocalBackend> {
    pub fn shutters(&self) -> Shutters<'_> {
        Shutters { client: self }
    }
}

impl Shutters<'_> {
    /// All shutters, with live status folded in.
    pub async fn get_all(&self) -> Result<Vec<Shutter>, Error> {
        let configs = self
            .client
            .exec_action("get_shutter_configurations", None)
            .await?
            .into_json()?;
        let status = self
            .client
            .exec_action("get_shutter_status", None)
            .await?
            .into_json()?;

        let merged = merge_status_by_id(
            envelope_list(&configs, "config")?,
            &envelope_list(&status, "status")?,
        );
        decode_flat_list(merged)
    }

    /// A single shutter by id. Returns `None` if no shutter matches.
    pub async fn get_by_id(&self, shutter_id: i64) -> Result<Option<Shutter>, Error> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .find(|shutter| shutter.idx == shutter_id))
    }

    /// Raise a shutter.
    pub async fn up(&self, shutter_id: i64) -> Result<(), Error> {
        debug!(shutter_id, "raising shutter");
        self.client
            .exec_action("do_shutter_up", Some(&json!({"id": shutter_id})))
            .await?;
        Ok(())
    }

    /// Lower a shutter.
    pub async fn down(&self, shutter_id: i64) -> Result<(), Error> {
        debug!(shutter_id, "lowering shutter");
        self.client
            .exec_action("do_shutter_down", Some(&json!({"id": shutter_id})))
            .await?;
        Ok(())
    }

    /// Stop a moving shutter.
    pub async fn stop(&self, shutter_id: i64) -> Result<(), Error> {
        debug!(shutter_id, "stopping shutter");
        self.client
            .exec_action("do_shutter_stop", Some(&json!({"id": shutter_id})))
            .await?;
        Ok(())
    }
}
