// Shared transport configuration for building reqwest::Client instances.
//
// Both the local-gateway and cloud clients share TLS and timeout settings
// through this module. The session itself is created lazily by the request
// engine; this is only the recipe.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

/// Default whole-call timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// TLS verification mode.
#[derive(Debug, Clone, Default)]
pub enum TlsMode {
    /// Verify certificates against the system store.
    VerifyFull,
    /// Verify against a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate. Local gateways ship self-signed
    /// certificates, so this is the default.
    #[default]
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP sessions.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TransportConfig {
    /// Enable or disable certificate verification against the system store.
    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.tls = if verify {
            TlsMode::VerifyFull
        } else {
            TlsMode::DangerAcceptInvalid
        };
        self
    }

    /// Verify certificates against a custom CA bundle instead.
    pub fn with_root_ca(mut self, path: impl Into<PathBuf>) -> Self {
        self.tls = TlsMode::CustomCa(path.into());
        self
    }

    /// Override the whole-call request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a pooled `reqwest::Client` from this config.
    pub(crate) fn build_client(&self, user_agent: &str) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(user_agent);

        match &self.tls {
            TlsMode::VerifyFull => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path).map_err(|e| {
                    Error::ConnectionSsl(format!("failed to read CA cert: {e}"))
                })?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::ConnectionSsl(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| Error::ConnectionSsl(format!("failed to build HTTP client: {e}")))
    }
}
