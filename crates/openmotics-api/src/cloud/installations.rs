// Cloud installation endpoints
//
// The only resource group that is not installation-scoped; it lists the
// installations themselves.

use crate::client::Client;
use crate::cloud::client::CloudBackend;
use crate::cloud::models::{Installation, decode_data};
use crate::error::Error;

/// Actions on the account's installations.
pub struct Installations<'a> {
    client: &'a Client<CloudBackend>,
}

impl Client<CloudBackend> {
    pub fn installations(&self) -> Installations<'_> {
        Installations { client: self }
    }
}

impl Installations<'_> {
    /// All installations the token can access.
    ///
    /// `GET /base/installations`
    pub async fn get_all(&self) -> Result<Vec<Installation>, Error> {
        let body = self.client.get("/base/installations").await?.into_json()?;
        decode_data(&body)
    }

    /// A single installation by id.
    ///
    /// `GET /base/installations/{id}`
    pub async fn get_by_id(&self, installation_id: i64) -> Result<Installation, Error> {
        let body = self
            .client
            .get(&format!("/base/installations/{installation_id}"))
            .await?
            .into_json()?;
        decode_data(&body)
    }
}
