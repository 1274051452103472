// Backend capability shared by the local-gateway and cloud clients.
//
// The request engine is generic over this trait: the backend decides how
// paths become URLs, how a usable credential is ensured before a call,
// and which auth headers accompany it. The engine owns everything else
// (session lifecycle, timeout, retry, error classification).

use std::future::Future;

use reqwest::header::HeaderMap;
use url::Url;

use crate::error::Error;
use crate::http::Http;

/// URL scheme for a request.
///
/// `Wss` exists only to build the WebSocket endpoint URL; the crate does
/// not open socket connections itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Https,
    Http,
    Wss,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Http => "http",
            Self::Wss => "wss",
        }
    }
}

/// Per-backend behavior of the authenticated-request engine.
pub trait Backend: Send + Sync {
    /// Resolve an API path into a full URL.
    ///
    /// `scheme` overrides the backend's default for this call (used for
    /// the `wss` endpoint URL); `None` keeps the default.
    fn resolve_url(&self, path: &str, scheme: Option<Scheme>) -> Result<Url, Error>;

    /// Ensure a usable credential before a request is issued.
    ///
    /// The local gateway re-logs-in here when its token is missing or
    /// about to expire; the cloud backend's token is static and this is
    /// a no-op. The login round-trip goes through `http`, so it gets the
    /// same retry and error classification as any other call.
    fn refresh_token(&self, http: &Http) -> impl Future<Output = Result<(), Error>> + Send;

    /// Merge authentication headers into `headers`.
    fn auth_headers(&self, headers: &mut HeaderMap) -> Result<(), Error>;
}
