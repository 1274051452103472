// Local gateway client
//
// Username/password are exchanged for a short-lived bearer token via
// `POST /login`; the token is refreshed proactively shortly before it
// expires. Endpoints are gateway "actions" (`get_version`,
// `get_output_configurations`, ...) invoked through `exec_action`.

use std::sync::{PoisonError, RwLock};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::backend::{Backend, Scheme};
use crate::client::Client;
use crate::error::Error;
use crate::http::{Http, ResponseBody};
use crate::transport::TransportConfig;

/// Default API port of a local gateway.
pub const DEFAULT_PORT: u16 = 443;

/// Lifetime of a gateway-issued bearer token.
const TOKEN_EXPIRES_IN: Duration = Duration::from_secs(3600);

/// Lead time before expiry at which a token is refreshed, guarding
/// against clock drift between client and gateway.
const CLOCK_SKEW_MARGIN: Duration = Duration::from_secs(20);

const LOCAL_ACCEPT: &str = "application/json, text/plain, */*";

/// Client for a local on-premise OpenMotics gateway.
pub type LocalGateway = Client<LocalBackend>;

struct Auth {
    username: String,
    password: SecretString,
}

/// Mutable credential state. Two concurrent calls racing on a stale
/// token may both log in; last write wins, which is harmless because
/// the gateway hands out interchangeable tokens. The lock is never held
/// across an await.
struct TokenState {
    token: Option<SecretString>,
    expires_at: SystemTime,
}

impl TokenState {
    fn cleared() -> Self {
        Self {
            token: None,
            expires_at: UNIX_EPOCH,
        }
    }

    fn is_stale(&self, now: SystemTime) -> bool {
        self.token.is_none() || self.expires_at < now + CLOCK_SKEW_MARGIN
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    success: bool,
    #[serde(default)]
    token: Option<String>,
}

/// Backend for a local gateway: host/port URL construction and the
/// login-based token lifecycle.
pub struct LocalBackend {
    host: String,
    port: u16,
    scheme: Scheme,
    auth: Option<Auth>,
    state: RwLock<TokenState>,
}

impl LocalBackend {
    fn new(host: String, port: u16, username: String, password: SecretString) -> Self {
        // Credentials are only usable when both parts are present.
        let auth = if username.is_empty() || password.expose_secret().is_empty() {
            None
        } else {
            Some(Auth { username, password })
        };
        Self {
            host,
            port,
            scheme: Scheme::Https,
            auth,
            state: RwLock::new(TokenState::cleared()),
        }
    }

    fn state(&self) -> std::sync::RwLockReadGuard<'_, TokenState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> std::sync::RwLockWriteGuard<'_, TokenState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Log in and store the issued token.
    ///
    /// On `success: false` (or a missing token) the credential state is
    /// reset and an `Authentication` error is returned.
    async fn login(&self, http: &Http) -> Result<(), Error> {
        let url = self.resolve_url("login", None)?;
        let body = self.auth.as_ref().map(|auth| {
            json!({
                "username": auth.username,
                "password": auth.password.expose_secret(),
            })
        });

        debug!(host = %self.host, "logging in to the gateway");
        let response = http
            .request(Method::POST, url, body.as_ref(), HeaderMap::new())
            .await?;
        let login: LoginResponse = response.decode()?;

        let mut state = self.state_mut();
        if !login.success {
            *state = TokenState::cleared();
            debug!("login rejected by the gateway");
            return Err(Error::Authentication {
                message: "gateway rejected the login credentials".into(),
            });
        }
        match login.token {
            Some(token) => {
                state.token = Some(token.into());
                state.expires_at = SystemTime::now() + TOKEN_EXPIRES_IN;
                debug!("login successful");
                Ok(())
            }
            None => {
                *state = TokenState::cleared();
                Err(Error::Authentication {
                    message: "login response carried no token".into(),
                })
            }
        }
    }
}

impl Backend for LocalBackend {
    fn resolve_url(&self, path: &str, scheme: Option<Scheme>) -> Result<Url, Error> {
        let scheme = scheme.unwrap_or(self.scheme);
        let path = path.trim_start_matches('/');
        let raw = format!("{}://{}:{}/{path}", scheme.as_str(), self.host, self.port);
        Ok(Url::parse(&raw)?)
    }

    async fn refresh_token(&self, http: &Http) -> Result<(), Error> {
        let stale = self.state().is_stale(SystemTime::now());
        if stale {
            self.login(http).await?;
        }
        Ok(())
    }

    fn auth_headers(&self, headers: &mut HeaderMap) -> Result<(), Error> {
        headers.insert(ACCEPT, HeaderValue::from_static(LOCAL_ACCEPT));
        if let Some(token) = &self.state().token {
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

impl Client<LocalBackend> {
    /// Create a client for a local gateway.
    ///
    /// `port` is usually [`DEFAULT_PORT`]. The session is created lazily
    /// on first use and owned by the client.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: SecretString,
        transport: &TransportConfig,
    ) -> Self {
        Self::from_backend(
            LocalBackend::new(host.into(), port, username.into(), password),
            transport,
        )
    }

    /// Create a client around an existing `reqwest::Client`.
    ///
    /// The session is shared, not owned: `close()` and `Drop` leave it
    /// untouched.
    pub fn with_session(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: SecretString,
        session: reqwest::Client,
        transport: &TransportConfig,
    ) -> Self {
        Self::from_backend_with_session(
            LocalBackend::new(host.into(), port, username.into(), password),
            transport,
            session,
        )
    }

    /// Override the default `https` scheme, for gateways reachable over
    /// plain HTTP. Per-call overrides via [`Client::send`] still apply.
    pub fn default_scheme(mut self, scheme: Scheme) -> Self {
        self.backend.scheme = scheme;
        self
    }

    /// Log in to the gateway now, instead of on the first call.
    pub async fn login(&self) -> Result<(), Error> {
        self.backend.login(&self.http).await
    }

    /// Execute a gateway action endpoint, e.g. `get_version`.
    pub async fn exec_action(
        &self,
        action: &str,
        body: Option<&Value>,
    ) -> Result<ResponseBody, Error> {
        self.post(action, body).await
    }

    /// The gateway's WebSocket events endpoint URL.
    pub fn ws_events_url(&self) -> Result<Url, Error> {
        self.backend.resolve_url("ws_events", Some(Scheme::Wss))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use secrecy::SecretString;

    use super::{Backend, LocalBackend, Scheme, TokenState};

    fn backend() -> LocalBackend {
        LocalBackend::new(
            "gateway.local".into(),
            3000,
            "admin".into(),
            SecretString::from("hunter2".to_owned()),
        )
    }

    #[test]
    fn resolve_url_builds_host_port_path() {
        let url = backend().resolve_url("get_version", None).unwrap();
        assert_eq!(url.as_str(), "https://gateway.local:3000/get_version");
    }

    #[test]
    fn resolve_url_honors_scheme_override() {
        let url = backend()
            .resolve_url("/ws_events", Some(Scheme::Wss))
            .unwrap();
        assert_eq!(url.as_str(), "wss://gateway.local:3000/ws_events");
    }

    #[test]
    fn missing_credentials_disable_auth() {
        let anonymous = LocalBackend::new(
            "gateway.local".into(),
            443,
            String::new(),
            SecretString::from(String::new()),
        );
        assert!(anonymous.auth.is_none());
        assert!(backend().auth.is_some());
    }

    #[test]
    fn cleared_state_is_stale() {
        assert!(TokenState::cleared().is_stale(SystemTime::now()));
        assert_eq!(TokenState::cleared().expires_at, UNIX_EPOCH);
    }

    #[test]
    fn token_within_skew_margin_is_stale() {
        let now = SystemTime::now();
        let state = TokenState {
            token: Some(SecretString::from("tok".to_owned())),
            expires_at: now + Duration::from_secs(10),
        };
        assert!(state.is_stale(now));
    }

    #[test]
    fn fresh_token_is_not_stale() {
        let now = SystemTime::now();
        let state = TokenState {
            token: Some(SecretString::from("tok".to_owned())),
            expires_at: now + Duration::from_secs(3600),
        };
        assert!(!state.is_stale(now));
    }
}
