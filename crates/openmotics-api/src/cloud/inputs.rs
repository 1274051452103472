// Cloud input endpoints

use crate::client::Client;
use crate::cloud::client::CloudBackend;
use crate::cloud::models::{Input, decode_data};
use crate::error::Error;

/// Actions on an installation's inputs.
pub struct Inputs<'a> {
    client: &'a Client<CloudBackend>,
}

impl Client<CloudBackend> {
    pub fn inputs(&self) -> Inputs<'_> {
        Inputs { client: self }
    }
}

impl Inputs<'_> {
    /// All inputs.
    ///
    /// `GET /base/installations/{id}/inputs`
    pub async fn get_all(&self) -> Result<Vec<Input>, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!("/base/installations/{installation_id}/inputs"))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// A single input by id.
    ///
    /// `GET /base/installations/{id}/inputs/{input_id}`
    pub async fn get_by_id(&self, input_id: i64) -> Result<Input, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/inputs/{input_id}"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }
}
