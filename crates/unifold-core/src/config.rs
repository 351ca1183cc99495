// ── Runtime connection configuration ──
//
// These types describe *how* to connect to a UniFi controller.
// They carry credential data and connection tuning, but never touch disk.
// The CLI constructs a `ControllerConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use unifold_api::{ControllerPlatform, TlsMode, TransportConfig};

/// Session-login credentials.
#[derive(Debug, Clone)]
pub struct AuthCredentials {
    pub username: String,
    pub password: SecretString,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs). Default for local controllers.
    #[default]
    DangerAcceptInvalid,
}

/// Configuration for connecting to a single controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Controller URL (e.g., `https://192.168.1.1:8443`).
    pub url: Url,
    pub credentials: AuthCredentials,
    pub platform: ControllerPlatform,
    /// Site to operate on (defaults to "default").
    pub site: String,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ControllerConfig {
    /// A classic-controller config with default site, TLS and timeout.
    pub fn new(url: Url, credentials: AuthCredentials) -> Self {
        Self {
            url,
            credentials,
            platform: ControllerPlatform::default(),
            site: "default".into(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }

    pub(crate) fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
            cookie_jar: None, // HttpTransport::new adds one
        }
    }
}
