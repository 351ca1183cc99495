// ── Core error types ──
//
// `DecodeError` covers normalizing a single wire object into a domain
// entity. `CoreError` is what fetchers return: either the request failed
// in `unifold-api`, or one element of the response failed to decode.

use thiserror::Error;

/// Failure to turn one wire object into a domain entity.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not well-formed JSON, or a value's JSON type does not
    /// fit the wire shape. Carries the parser's message and position.
    #[error("malformed JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// A semantic field holds a value that violates its format.
    #[error("invalid {field} {value:?}: {reason}")]
    Field {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The device `type` discriminant names hardware this crate doesn't model.
    #[error("unsupported device type {kind:?}")]
    UnsupportedKind { kind: String },
}

impl DecodeError {
    pub(crate) fn field(
        field: &'static str,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::Field {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// The semantic field at fault, for `Field` errors.
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            Self::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The request itself failed: transport, status, content type, envelope.
    #[error(transparent)]
    Api(#[from] unifold_api::Error),

    /// Element `index` of a fetched collection could not be decoded.
    #[error("failed to decode {entity} at index {index}: {source}")]
    Decode {
        entity: &'static str,
        index: usize,
        #[source]
        source: DecodeError,
    },
}

impl CoreError {
    /// Returns `true` if the controller rejected the session or credentials.
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_auth_rejected())
    }

    /// Returns `true` when no response arrived (refused, unreachable, timed out).
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_connect())
    }
}
