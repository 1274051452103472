use thiserror::Error;

/// Top-level error type for the `openmotics-api` crate.
///
/// Every transport and protocol failure is normalized into one of these
/// kinds at the request-engine boundary; raw `reqwest` errors never
/// cross it. Accessors and callers don't catch -- typed errors propagate
/// straight to the application.
#[derive(Debug, Error)]
pub enum Error {
    /// Generic communication failure: DNS, connection refused/reset, or
    /// an HTTP error status other than 401/403. Carries the status code
    /// and server message when a response was received.
    #[error("Error communicating with the OpenMotics API: {message}")]
    Connection {
        message: String,
        status: Option<u16>,
    },

    /// The request exceeded its timeout budget.
    #[error("Request to the OpenMotics API timed out after {timeout_secs}s")]
    ConnectionTimeout { timeout_secs: u64 },

    /// TLS handshake or certificate verification failure.
    #[error("TLS error while connecting to the OpenMotics API: {0}")]
    ConnectionSsl(String),

    /// The API rejected the credentials (HTTP 401 or 403), or a login
    /// exchange failed.
    #[error("Authentication rejected by the OpenMotics API: {message}")]
    Authentication { message: String },

    /// URL construction failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No installation has been selected on a cloud client.
    #[error("No installation selected -- call set_installation_id first")]
    MissingInstallation,

    /// JSON deserialization into a typed record failed, with the raw
    /// body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// Only generic connection failures retry; authentication, TLS, and
    /// timeout errors are surfaced immediately.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// The HTTP status code, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Connection { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn only_connection_errors_are_transient() {
        let conn = Error::Connection {
            message: "boom".into(),
            status: Some(500),
        };
        let auth = Error::Authentication {
            message: "nope".into(),
        };
        let timeout = Error::ConnectionTimeout { timeout_secs: 8 };
        let ssl = Error::ConnectionSsl("bad cert".into());

        assert!(conn.is_transient());
        assert!(!auth.is_transient());
        assert!(!timeout.is_transient());
        assert!(!ssl.is_transient());
    }

    #[test]
    fn status_is_exposed_for_connection_errors() {
        let conn = Error::Connection {
            message: "not found".into(),
            status: Some(404),
        };
        assert_eq!(conn.status(), Some(404));
        assert_eq!(Error::ConnectionTimeout { timeout_secs: 1 }.status(), None);
    }
}
