// Legacy API client
//
// Wraps a `Transport` with UniFi-specific path construction, envelope
// unwrapping, and platform-aware path prefixing. Endpoint modules
// (devices, stations, etc.) are implemented as inherent methods in
// separate files to keep this module focused on transport mechanics.

use reqwest::Method;
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use crate::auth::ControllerPlatform;
use crate::error::Error;
use crate::legacy::models::{LegacyResponse, RawEntity};
use crate::transport::{HttpTransport, Transport, TransportConfig};

/// Client for the UniFi controller's legacy API.
///
/// Handles the `{ data: [], meta: { rc, msg } }` envelope and site-scoped
/// path construction. Listing methods return the elements of `data` as
/// raw JSON, in wire order, for per-entity decoding by the caller.
pub struct LegacyClient<T = HttpTransport> {
    transport: T,
    platform: ControllerPlatform,
}

impl LegacyClient<HttpTransport> {
    /// Create a client talking HTTP to the controller at `base_url`.
    ///
    /// The `base_url` should be the controller root (e.g.
    /// `https://192.168.1.1` for UniFi OS or `https://controller:8443`
    /// for standalone).
    pub fn new(
        base_url: Url,
        platform: ControllerPlatform,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let transport = HttpTransport::new(base_url, transport)?;
        Ok(Self::with_transport(transport, platform))
    }
}

impl<T: Transport> LegacyClient<T> {
    /// Create a client over an existing transport.
    pub fn with_transport(transport: T, platform: ControllerPlatform) -> Self {
        Self {
            transport,
            platform,
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The controller platform paths are built for.
    pub fn platform(&self) -> ControllerPlatform {
        self.platform
    }

    // ── Path builders ────────────────────────────────────────────────

    /// Controller-level API path: `{prefix}/api/{path}`.
    pub(crate) fn api_path(&self, path: &str) -> String {
        format!("{}/api/{path}", self.platform.legacy_prefix())
    }

    /// Site-scoped API path: `{prefix}/api/s/{site}/{path}`.
    pub(crate) fn site_path(&self, site: &str, path: &str) -> String {
        format!("{}/api/s/{site}/{path}", self.platform.legacy_prefix())
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the envelope.
    pub(crate) fn get(&self, path: &str) -> Result<Vec<RawEntity>, Error> {
        let bytes = self.transport.send(Method::GET, path, None)?;
        parse_envelope(&bytes)
    }

    /// Send a POST request with a JSON body, returning the raw response.
    ///
    /// Used for endpoints whose reply isn't an envelope (login, logout).
    pub(crate) fn post_unchecked(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> Result<(), Error> {
        let body = serde_json::to_value(body).map_err(Error::Encode)?;
        self.transport.send(Method::POST, path, Some(&body))?;
        Ok(())
    }
}

/// Parse the `{ meta, data }` envelope, returning `data` on success or
/// `Error::Api` if `meta.rc` is present and not `"ok"`.
pub fn parse_envelope(bytes: &[u8]) -> Result<Vec<RawEntity>, Error> {
    let envelope: LegacyResponse<RawEntity> =
        serde_json::from_slice(bytes).map_err(Error::BadEnvelope)?;

    if let Some(meta) = envelope.meta {
        if meta.rc != "ok" {
            debug!(rc = %meta.rc, "controller reported failure");
            return Err(Error::Api {
                message: meta.msg.unwrap_or_else(|| format!("rc={}", meta.rc)),
            });
        }
    }

    trace!(count = envelope.data.len(), "envelope unwrapped");
    Ok(envelope.data)
}
