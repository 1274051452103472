// Local gateway input endpoints

use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::local::client::LocalBackend;
use crate::local::models::{Input, decode_flat_list, envelope_list};

/// Actions on the gateway's inputs.
pub struct Inputs<'a> {
    client: &'a Client<LocalBackend>,
}

impl Client<LocalBackend> {
    pub fn inputs(&self) -> Inputs<'_> {
        Inputs { client: self }
    }
}

impl Inputs<'_> {
    /// All configured inputs.
    pub async fn get_all(&self) -> Result<Vec<Input>, Error> {
        let configs = self
            .client
            .exec_action("get_input_configurations", None)
            .await?
            .into_json()?;
        decode_flat_list(envelope_list(&configs, "config")?)
    }

    /// A single input by id. Returns `None` if no input matches.
    pub async fn get_by_id(&self, input_id: i64) -> Result<Option<Input>, Error> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .find(|input| input.idx == input_id))
    }

    /// The inputs pressed in the last 60 seconds, as raw records.
    pub async fn last_inputs(&self) -> Result<Vec<Value>, Error> {
        let body = self
            .client
            .exec_action("get_last_inputs", None)
            .await?
            .into_json()?;
        envelope_list(&body, "inputs")
    }
}
