//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with help text.

use miette::Diagnostic;
use thiserror::Error;

use unifold_config::ConfigError;
use unifold_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const DECODE: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(unifold::connection_failed),
        help(
            "Check that the controller is running and reachable.\n\
             Self-signed certificate? Try --insecure (-k)."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: CoreError,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed for profile '{profile}'")]
    #[diagnostic(
        code(unifold::auth_failed),
        help(
            "Verify the username and password.\n\
             Run: unifold config set-password --profile {profile}"
        )
    )]
    AuthFailed { profile: String },

    #[error("Controller rejected the session")]
    #[diagnostic(
        code(unifold::session_rejected),
        help(
            "The login succeeded but a later request was refused.\n\
             The session may have expired, or the account lacks access to this site."
        )
    )]
    SessionRejected(#[source] CoreError),

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(unifold::no_credentials),
        help(
            "Set a username with: unifold config init --username <USER>\n\
             Then store a password with: unifold config set-password\n\
             Or set the UNIFOLD_PASSWORD environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Controller responses ─────────────────────────────────────────
    #[error("Controller request failed")]
    #[diagnostic(code(unifold::api_error))]
    Api(#[source] CoreError),

    #[error("Controller returned data that could not be decoded")]
    #[diagnostic(
        code(unifold::decode_error),
        help("Run with -vv to log the failing request.")
    )]
    Decode(#[source] CoreError),

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(unifold::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(unifold::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: unifold config init {name} --controller <URL>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No controller configured")]
    #[diagnostic(
        code(unifold::no_config),
        help(
            "Pass --controller <URL>, or create a profile with: unifold config init\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(unifold::config))]
    Config(ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(unifold::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::SessionRejected(_) | Self::NoCredentials { .. } => {
                exit_code::AUTH
            }
            Self::ProfileNotFound { .. } | Self::NoConfig { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Decode(_) => exit_code::DECODE,
            Self::Api(_) | Self::Config(_) | Self::Io(_) | Self::Render(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        if err.is_auth_rejected() {
            return Self::SessionRejected(err);
        }
        match err {
            CoreError::Decode { .. } => Self::Decode(err),
            CoreError::Api(_) => Self::Api(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::ProfileNotFound { name } => Self::ProfileNotFound {
                name,
                available: String::new(),
            },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use unifold_core::DecodeError;

    use super::*;

    #[test]
    fn auth_rejection_maps_to_auth_exit_code() {
        let err = CliError::from(CoreError::Api(unifold_core::ApiError::BadStatus {
            status: 401,
        }));
        assert!(matches!(err, CliError::SessionRejected(_)));
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }

    #[test]
    fn mid_command_rejection_names_no_profile() {
        let err = CliError::from(CoreError::Api(unifold_core::ApiError::BadStatus {
            status: 403,
        }));
        let help = err.help().map(|h| format!("{h}")).unwrap_or_default();
        assert!(!help.contains("--profile"), "{help}");
        assert!(!err.to_string().contains("current"));
    }

    #[test]
    fn decode_failures_have_their_own_exit_code() {
        let err = CliError::from(CoreError::Decode {
            entity: "device",
            index: 3,
            source: DecodeError::UnsupportedKind { kind: "uph".into() },
        });
        assert_eq!(err.exit_code(), exit_code::DECODE);
    }

    #[test]
    fn config_errors_keep_their_meaning() {
        let err = CliError::from(ConfigError::NoCredentials {
            profile: "home".into(),
        });
        assert!(matches!(err, CliError::NoCredentials { ref profile } if profile == "home"));
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }
}
