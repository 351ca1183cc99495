use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

/// The platform type of the UniFi controller.
///
/// Determines URL prefixes and login paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerPlatform {
    /// UniFi OS device (UDM, UCG, etc.) -- port 443, `/proxy/network/` prefix.
    UnifiOs,
    /// Standalone Network Application (Java) -- port 8443, no prefix.
    #[default]
    ClassicController,
}

impl ControllerPlatform {
    /// The path prefix for legacy API endpoints.
    pub fn legacy_prefix(self) -> &'static str {
        match self {
            Self::UnifiOs => "/proxy/network",
            Self::ClassicController => "",
        }
    }

    /// The login endpoint path.
    pub fn login_path(self) -> &'static str {
        match self {
            Self::UnifiOs => "/api/auth/login",
            Self::ClassicController => "/api/login",
        }
    }

    /// The logout endpoint path.
    pub fn logout_path(self) -> &'static str {
        match self {
            Self::UnifiOs => "/api/auth/logout",
            Self::ClassicController => "/api/logout",
        }
    }
}

impl fmt::Display for ControllerPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnifiOs => f.write_str("unifi-os"),
            Self::ClassicController => f.write_str("classic"),
        }
    }
}

impl FromStr for ControllerPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unifi-os" | "unifios" | "udm" => Ok(Self::UnifiOs),
            "classic" | "standalone" | "controller" => Ok(Self::ClassicController),
            other => Err(format!("expected 'classic' or 'unifi-os', got '{other}'")),
        }
    }
}

/// Credential body posted to the login endpoint.
///
/// Serializes as `{"username": "...", "password": "..."}`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    #[serde(serialize_with = "expose")]
    pub password: &'a SecretString,
}

fn expose<S: Serializer>(secret: &&SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}
