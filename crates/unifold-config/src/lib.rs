//! Configuration for the unifold CLI.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `unifold_core::ControllerConfig`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use unifold_core::{AuthCredentials, ControllerConfig, ControllerPlatform, TlsVerification};

/// Keyring service name. Entries are keyed `{profile}/password`.
pub const KEYRING_SERVICE: &str = "unifold";

/// Environment variable holding the password; wins over keyring and file.
pub const PASSWORD_ENV: &str = "UNIFOLD_PASSWORD";

const ENV_PREFIX: &str = "UNIFOLD_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found in config")]
    ProfileNotFound { name: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when `--profile` isn't given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named controller profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up `name`, or the default profile when `name` is `None`.
    pub fn profile(&self, name: Option<&str>) -> Result<(&str, &Profile), ConfigError> {
        let name = name
            .or(self.default_profile.as_deref())
            .unwrap_or("default");
        self.profiles
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| ConfigError::ProfileNotFound { name: name.into() })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named controller profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Controller base URL (e.g., "https://192.168.1.1:8443").
    pub controller: String,

    /// Site name used in API paths.
    #[serde(default = "default_site")]
    pub site: String,

    /// "classic" (standalone Network Application) or "unifi-os".
    #[serde(default = "default_platform")]
    pub platform: String,

    pub username: Option<String>,

    /// Password (plaintext; prefer keyring or `UNIFOLD_PASSWORD`).
    pub password: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,
}

fn default_site() -> String {
    "default".into()
}
fn default_platform() -> String {
    "classic".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "unifold", "unifold").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("unifold");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load defaults, then the TOML file at `path` (if present), then
/// `UNIFOLD_`-prefixed environment variables (`__` separates nesting).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve username + password for a profile.
///
/// The password comes from, in order: `UNIFOLD_PASSWORD`, the system
/// keyring (`unifold` / `{profile}/password`), the profile's plaintext
/// `password`.
pub fn resolve_credentials(
    profile: &Profile,
    profile_name: &str,
) -> Result<AuthCredentials, ConfigError> {
    resolve_credentials_with(
        profile,
        profile_name,
        std::env::var(PASSWORD_ENV).ok(),
        keyring_password,
    )
}

fn keyring_password(profile_name: &str) -> Option<String> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
        .and_then(|entry| entry.get_password())
        .ok()
}

fn resolve_credentials_with(
    profile: &Profile,
    profile_name: &str,
    env_password: Option<String>,
    keyring_lookup: impl Fn(&str) -> Option<String>,
) -> Result<AuthCredentials, ConfigError> {
    let no_credentials = || ConfigError::NoCredentials {
        profile: profile_name.into(),
    };

    let username = profile.username.clone().ok_or_else(no_credentials)?;

    let password = env_password
        .or_else(|| keyring_lookup(profile_name))
        .or_else(|| profile.password.clone())
        .ok_or_else(no_credentials)?;

    Ok(AuthCredentials {
        username,
        password: SecretString::from(password),
    })
}

/// Store a profile's password in the system keyring.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
        .and_then(|entry| entry.set_password(password))
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })
}

// ── Translation ─────────────────────────────────────────────────────

/// Build a `ControllerConfig` from a profile, resolving credentials.
pub fn profile_to_controller_config(
    profile: &Profile,
    profile_name: &str,
) -> Result<ControllerConfig, ConfigError> {
    let credentials = resolve_credentials(profile, profile_name)?;
    build_controller_config(profile, credentials)
}

/// Build a `ControllerConfig` from a profile with already-resolved credentials.
pub fn build_controller_config(
    profile: &Profile,
    credentials: AuthCredentials,
) -> Result<ControllerConfig, ConfigError> {
    let url: url::Url = profile
        .controller
        .parse()
        .map_err(|e| ConfigError::Validation {
            field: "controller".into(),
            reason: format!("invalid URL '{}': {e}", profile.controller),
        })?;

    let platform: ControllerPlatform =
        profile
            .platform
            .parse()
            .map_err(|reason| ConfigError::Validation {
                field: "platform".into(),
                reason,
            })?;

    let tls = match (profile.insecure, &profile.ca_cert) {
        (Some(true), _) => TlsVerification::DangerAcceptInvalid,
        (_, Some(ca_path)) => TlsVerification::CustomCa(ca_path.clone()),
        (Some(false), None) => TlsVerification::SystemDefaults,
        // local controllers are typically self-signed
        (None, None) => TlsVerification::DangerAcceptInvalid,
    };

    let mut config = ControllerConfig::new(url, credentials);
    config.platform = platform;
    config.site.clone_from(&profile.site);
    config.tls = tls;
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or_else(default_timeout));
    Ok(config)
}
