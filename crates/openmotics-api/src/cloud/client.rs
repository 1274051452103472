// Cloud client
//
// The cloud API is multi-tenant: a static bearer token authenticates the
// account, and every resource path is scoped by an installation id. The
// installation id is mutable client state so one client can be pointed
// at different installations; accessors read it on each call.

use std::sync::{PoisonError, RwLock};

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::backend::{Backend, Scheme};
use crate::client::Client;
use crate::error::Error;
use crate::http::Http;
use crate::transport::TransportConfig;

/// Default base URL of the cloud API.
pub const CLOUD_BASE_URL: &str = "https://api.openmotics.com/api/v1.1";

/// Client for the cloud-hosted OpenMotics API.
pub type OpenMoticsCloud = Client<CloudBackend>;

/// Backend for the cloud API: static token, base-URL-relative paths.
pub struct CloudBackend {
    base_url: String,
    token: Option<SecretString>,
    installation_id: RwLock<Option<i64>>,
}

impl CloudBackend {
    fn new(token: Option<SecretString>, base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            token,
            installation_id: RwLock::new(None),
        }
    }

    fn installation_id(&self) -> Option<i64> {
        *self
            .installation_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn set_installation_id(&self, installation_id: Option<i64>) {
        *self
            .installation_id
            .write()
            .unwrap_or_else(PoisonError::into_inner) = installation_id;
    }
}

impl Backend for CloudBackend {
    /// Paths are appended to the base URL verbatim; resource paths carry
    /// their own leading slash.
    fn resolve_url(&self, path: &str, scheme: Option<Scheme>) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("{}{path}", self.base_url))?;
        if let Some(scheme) = scheme {
            url.set_scheme(scheme.as_str())
                .map_err(|()| Error::Connection {
                    message: format!("cannot apply scheme {} to {url}", scheme.as_str()),
                    status: None,
                })?;
        }
        Ok(url)
    }

    /// The cloud token is static; there is nothing to refresh.
    fn refresh_token(
        &self,
        _http: &Http,
    ) -> impl std::future::Future<Output = Result<(), Error>> + Send {
        std::future::ready(Ok(()))
    }

    fn auth_headers(&self, headers: &mut HeaderMap) -> Result<(), Error> {
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|e| Error::Authentication {
                    message: format!("invalid token header value: {e}"),
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(())
    }
}

impl Client<CloudBackend> {
    /// Create a client for the hosted cloud API.
    pub fn new(token: SecretString, transport: &TransportConfig) -> Self {
        Self::from_backend(
            CloudBackend::new(Some(token), CLOUD_BASE_URL.to_owned()),
            transport,
        )
    }

    /// Create a client against a non-default base URL (self-hosted or
    /// regional deployments).
    pub fn with_base_url(
        token: SecretString,
        base_url: impl Into<String>,
        transport: &TransportConfig,
    ) -> Self {
        Self::from_backend(CloudBackend::new(Some(token), base_url.into()), transport)
    }

    /// Create a client around an existing `reqwest::Client`.
    ///
    /// The session is shared, not owned: `close()` and `Drop` leave it
    /// untouched.
    pub fn with_session(
        token: SecretString,
        base_url: impl Into<String>,
        session: reqwest::Client,
        transport: &TransportConfig,
    ) -> Self {
        Self::from_backend_with_session(
            CloudBackend::new(Some(token), base_url.into()),
            transport,
            session,
        )
    }

    /// The installation all resource paths are scoped to, if selected.
    pub fn installation_id(&self) -> Option<i64> {
        self.backend.installation_id()
    }

    /// Select the installation for subsequent resource calls.
    pub fn set_installation_id(&self, installation_id: i64) {
        self.backend.set_installation_id(Some(installation_id));
    }

    pub(crate) fn require_installation(&self) -> Result<i64, Error> {
        self.backend
            .installation_id()
            .ok_or(Error::MissingInstallation)
    }

    /// Subscribe to webhook event delivery for the given installations.
    pub async fn subscribe_webhook(
        &self,
        installation_ids: &[i64],
        event_types: &[&str],
    ) -> Result<(), Error> {
        debug!(?installation_ids, "subscribing to webhook events");
        self.post(
            "/ws/events",
            Some(&json!({
                "types": event_types,
                "installation_ids": installation_ids,
            })),
        )
        .await?;
        Ok(())
    }

    /// Cancel webhook event delivery.
    pub async fn unsubscribe_webhook(&self) -> Result<(), Error> {
        debug!("unsubscribing from webhook events");
        self.delete("/ws/events").await?;
        Ok(())
    }

    /// The cloud WebSocket events endpoint URL.
    pub fn ws_events_url(&self) -> Result<Url, Error> {
        self.backend.resolve_url("/ws/events", Some(Scheme::Wss))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::{Backend, CLOUD_BASE_URL, CloudBackend, Scheme};

    fn backend() -> CloudBackend {
        CloudBackend::new(
            Some(SecretString::from("test_token".to_owned())),
            CLOUD_BASE_URL.to_owned(),
        )
    }

    #[test]
    fn default_base_url_interpolates_into_paths() {
        let url = backend().resolve_url("/test", None).unwrap();
        assert_eq!(url.as_str(), "https://api.openmotics.com/api/v1.1/test");
    }

    #[test]
    fn custom_base_url_is_used_verbatim() {
        let backend = CloudBackend::new(None, "https://custom.url".to_owned());
        let url = backend.resolve_url("/test", None).unwrap();
        assert_eq!(url.as_str(), "https://custom.url/test");
    }

    #[test]
    fn trailing_slash_on_base_url_is_trimmed() {
        let backend = CloudBackend::new(None, "https://custom.url/".to_owned());
        let url = backend.resolve_url("/test", None).unwrap();
        assert_eq!(url.as_str(), "https://custom.url/test");
    }

    #[test]
    fn scheme_override_builds_websocket_url() {
        let url = backend()
            .resolve_url("/ws/events", Some(Scheme::Wss))
            .unwrap();
        assert_eq!(url.as_str(), "wss://api.openmotics.com/api/v1.1/ws/events");
    }

    #[test]
    fn installation_id_is_mutable_state() {
        let backend = backend();
        assert_eq!(backend.installation_id(), None);
        backend.set_installation_id(Some(123));
        assert_eq!(backend.installation_id(), Some(123));
    }
}
