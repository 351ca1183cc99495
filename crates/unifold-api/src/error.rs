use thiserror::Error;

/// Top-level error type for the `unifold-api` crate.
///
/// Covers every failure mode of a single request/response cycle:
/// client setup, the HTTP exchange itself, response validation, and the
/// outer `{ data, meta }` envelope. `unifold-core` wraps these into
/// `CoreError` alongside per-entity decode failures.
#[derive(Debug, Error)]
pub enum Error {
    // ── Response validation ─────────────────────────────────────────
    /// The response media type was not `application/json`.
    #[error("expected JSON content type, received {content_type:?}")]
    BadContentType { content_type: String },

    /// The controller answered with a non-success HTTP status.
    #[error("unexpected HTTP status code: {status}")]
    BadStatus { status: u16 },

    /// The outer JSON envelope could not be decoded.
    #[error("malformed response envelope: {0}")]
    BadEnvelope(#[source] serde_json::Error),

    /// The envelope decoded, but `meta.rc` reported a failure.
    #[error("controller API error: {message}")]
    Api { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// Request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    /// Returns `true` if the controller rejected the session or credentials.
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::BadStatus { status: 401 | 403 })
    }

    /// Returns `true` for connection-level failures where no response arrived.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadStatus { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
