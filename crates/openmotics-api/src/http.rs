// Raw HTTP request engine shared by both backends.
//
// Owns the pooled session (lazily created when the caller didn't supply
// one), applies the whole-call timeout, retries transient connection
// failures, and classifies every failure into the crate's error taxonomy.
// Nothing below this boundary escapes untyped.

use std::sync::{PoisonError, RwLock};

use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Total attempts for a request that keeps failing transiently.
const MAX_ATTEMPTS: u32 = 3;

/// A parsed response body.
///
/// Responses with a JSON content type are parsed; everything else is
/// returned as raw text, unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// The parsed JSON value, or a `Deserialization` error for a
    /// non-JSON response.
    pub fn into_json(self) -> Result<Value, Error> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(body) => Err(Error::Deserialization {
                message: "expected a JSON response body".into(),
                body,
            }),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(body) => Some(body),
        }
    }

    /// Decode the JSON body into a typed record.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, Error> {
        let value = self.into_json()?;
        serde_json::from_value(value.clone()).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: value.to_string(),
        })
    }
}

struct SessionSlot {
    client: Option<reqwest::Client>,
    /// Whether the session was created by us. `close()` only tears down
    /// self-created sessions; caller-supplied ones are shared, not owned.
    owned: bool,
}

/// The shared request engine.
pub struct Http {
    config: TransportConfig,
    user_agent: &'static str,
    session: RwLock<SessionSlot>,
}

impl Http {
    pub(crate) fn new(config: TransportConfig, user_agent: &'static str) -> Self {
        Self {
            config,
            user_agent,
            session: RwLock::new(SessionSlot {
                client: None,
                owned: false,
            }),
        }
    }

    pub(crate) fn with_session(
        config: TransportConfig,
        user_agent: &'static str,
        session: reqwest::Client,
    ) -> Self {
        Self {
            config,
            user_agent,
            session: RwLock::new(SessionSlot {
                client: Some(session),
                owned: false,
            }),
        }
    }

    /// The pooled session, created on first use if none was supplied.
    fn session(&self) -> Result<reqwest::Client, Error> {
        {
            let slot = self.session.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(client) = &slot.client {
                return Ok(client.clone());
            }
        }

        let client = self.config.build_client(self.user_agent)?;
        let mut slot = self.session.write().unwrap_or_else(PoisonError::into_inner);
        // A concurrent caller may have created one in the meantime.
        if let Some(existing) = &slot.client {
            return Ok(existing.clone());
        }
        slot.client = Some(client.clone());
        slot.owned = true;
        Ok(client)
    }

    /// Close the session if it was created by this engine.
    ///
    /// Idempotent; a no-op for caller-supplied sessions. A later request
    /// lazily creates a fresh session.
    pub fn close(&self) {
        let mut slot = self.session.write().unwrap_or_else(PoisonError::into_inner);
        if slot.owned {
            slot.client = None;
            slot.owned = false;
        }
    }

    /// Issue a request, retrying transient connection failures up to
    /// three attempts total. Each attempt runs under its own timeout.
    pub async fn request(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<ResponseBody, Error> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self
                .try_request(method.clone(), url.clone(), body, headers.clone())
                .await
            {
                Ok(parsed) => return Ok(parsed),
                Err(err) if err.is_transient() && attempt < MAX_ATTEMPTS => {
                    debug!(attempt, %url, "retrying after transient error: {err}");
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn try_request(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<ResponseBody, Error> {
        let client = self.session()?;
        debug!("{method} {url}");

        let mut request = client
            .request(method, url)
            .timeout(self.config.timeout)
            .headers(headers);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Err(self.classify(&err)),
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Authentication {
                message: format!("authentication rejected (HTTP {status})"),
            });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Connection {
                message: if message.is_empty() {
                    status.to_string()
                } else {
                    message
                },
                status: Some(status.as_u16()),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => return Err(self.classify(&err)),
        };

        if content_type.contains("application/json") {
            let value: Value = serde_json::from_str(&text).map_err(|e| Error::Connection {
                message: format!("invalid JSON in response body: {e}"),
                status: None,
            })?;
            Ok(ResponseBody::Json(value))
        } else {
            Ok(ResponseBody::Text(text))
        }
    }

    /// Map a transport failure onto the error taxonomy.
    fn classify(&self, err: &reqwest::Error) -> Error {
        if err.is_timeout() {
            return Error::ConnectionTimeout {
                timeout_secs: self.config.timeout.as_secs(),
            };
        }
        if is_tls_failure(err) {
            return Error::ConnectionSsl(err.to_string());
        }
        Error::Connection {
            message: format!("error communicating with the gateway: {err}"),
            status: err.status().map(|s| s.as_u16()),
        }
    }
}

/// Walk the error source chain looking for certificate/handshake
/// failures. reqwest doesn't expose TLS errors as a distinct kind, so
/// this inspects the rustls/io causes by message.
fn is_tls_failure(err: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(cause) = source {
        let text = cause.to_string().to_ascii_lowercase();
        if text.contains("certificate") || text.contains("handshake") || text.contains("tls") {
            return true;
        }
        source = cause.source();
    }
    false
}
