// Generic authenticated client over a Backend.
//
// `get`/`post` are the surface all resource accessors consume: refresh
// the credential via the backend hook, compose auth headers, resolve the
// URL, then hand off to the request engine.

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;

use crate::backend::{Backend, Scheme};
use crate::error::Error;
use crate::http::{Http, ResponseBody};
use crate::transport::TransportConfig;

pub(crate) const USER_AGENT_STRING: &str =
    concat!("openmotics-api/", env!("CARGO_PKG_VERSION"));

/// Authenticated API client, generic over the backend.
///
/// Use the [`LocalGateway`](crate::LocalGateway) and
/// [`OpenMoticsCloud`](crate::OpenMoticsCloud) aliases; their inherent
/// impls provide the constructors and resource accessors.
pub struct Client<B> {
    pub(crate) http: Http,
    pub(crate) backend: B,
}

impl<B: Backend> Client<B> {
    pub(crate) fn from_backend(backend: B, transport: &TransportConfig) -> Self {
        Self {
            http: Http::new(transport.clone(), USER_AGENT_STRING),
            backend,
        }
    }

    pub(crate) fn from_backend_with_session(
        backend: B,
        transport: &TransportConfig,
        session: reqwest::Client,
    ) -> Self {
        Self {
            http: Http::with_session(transport.clone(), USER_AGENT_STRING, session),
            backend,
        }
    }

    /// The `User-Agent` value sent with every request.
    pub fn user_agent(&self) -> &'static str {
        USER_AGENT_STRING
    }

    /// The raw request engine, for endpoints this crate doesn't cover.
    pub fn http(&self) -> &Http {
        &self.http
    }

    /// Issue a GET request against an API path.
    pub async fn get(&self, path: &str) -> Result<ResponseBody, Error> {
        self.send(Method::GET, path, None, None, None).await
    }

    /// Issue a GET request with query parameters.
    pub async fn get_with_params(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<ResponseBody, Error> {
        self.send(Method::GET, path, Some(params), None, None).await
    }

    /// Issue a POST request with an optional JSON body.
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<ResponseBody, Error> {
        self.send(Method::POST, path, None, body, None).await
    }

    /// Issue a DELETE request against an API path.
    pub async fn delete(&self, path: &str) -> Result<ResponseBody, Error> {
        self.send(Method::DELETE, path, None, None, None).await
    }

    /// Issue a request with full control over method, query, body, and
    /// per-call scheme override.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(&str, &str)]>,
        body: Option<&Value>,
        scheme: Option<Scheme>,
    ) -> Result<ResponseBody, Error> {
        self.backend.refresh_token(&self.http).await?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
        self.backend.auth_headers(&mut headers)?;

        let mut url = self.backend.resolve_url(path, scheme)?;
        if let Some(params) = params {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
            drop(pairs);
        }

        self.http.request(method, url, body, headers).await
    }

    /// Close the client's session.
    ///
    /// Idempotent, and a no-op when the session was supplied by the
    /// caller. Dropping the client closes it as well.
    pub fn close(&self) {
        self.http.close();
    }
}

impl<B> Drop for Client<B> {
    fn drop(&mut self) {
        self.http.close();
    }
}
