// Cloud ventilation endpoints

use crate::client::Client;
use crate::cloud::client::CloudBackend;
use crate::cloud::models::{VentilationUnit, decode_data};
use crate::error::Error;

/// Actions on an installation's ventilation units.
pub struct Ventilations<'a> {
    client: &'a Client<CloudBackend>,
}

impl Client<CloudBackend> {
    pub fn ventilations(&self) -> Ventilations<'_> {
        Ventilations { client: self }
    }
}

impl Ventilations<'_> {
    /// All ventilation units.
    ///
    /// `GET /base/installations/{id}/ventilations/units`
    pub async fn get_all(&self) -> Result<Vec<VentilationUnit>, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/ventilations/units"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }

    /// A single ventilation unit by id.
    ///
    /// `GET /base/installations/{id}/ventilations/units/{unit_id}`
    pub async fn get_by_id(&self, unit_id: i64) -> Result<VentilationUnit, Error> {
        let installation_id = self.client.require_installation()?;
        let body = self
            .client
            .get(&format!(
                "/base/installations/{installation_id}/ventilations/units/{unit_id}"
            ))
            .await?
            .into_json()?;
        decode_data(&body)
    }
}
