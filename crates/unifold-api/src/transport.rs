// Shared transport configuration and the request/response seam.
//
// `TransportConfig` owns TLS, timeout, and cookie settings for building a
// blocking `reqwest` client. `Transport` is the boundary the fetchers talk
// to: one request in, validated JSON bytes out.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::Method;
use reqwest::blocking::ClientBuilder;
use reqwest::cookie::Jar;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;

/// The only response media type the controller API is accepted with.
pub const JSON_CONTENT_TYPE: &str = "application/json";

const USER_AGENT: &str = concat!("unifold/", env!("CARGO_PKG_VERSION"));

/// TLS verification mode.
#[derive(Debug, Clone)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (for self-signed controllers).
    DangerAcceptInvalid,
}

/// Transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
    pub cookie_jar: Option<Arc<Jar>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::DangerAcceptInvalid,
            timeout: Duration::from_secs(30),
            cookie_jar: None,
        }
    }
}

impl TransportConfig {
    /// Build a blocking `reqwest` client from this config.
    pub fn build_client(&self) -> Result<reqwest::blocking::Client, Error> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT);

        builder = self.apply_tls(builder)?;

        if let Some(ref jar) = self.cookie_jar {
            builder = builder.cookie_provider(Arc::clone(jar));
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    fn apply_tls(&self, builder: ClientBuilder) -> Result<ClientBuilder, Error> {
        match &self.tls {
            TlsMode::System => Ok(builder),
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                Ok(builder.add_root_certificate(cert))
            }
            TlsMode::DangerAcceptInvalid => Ok(builder.danger_accept_invalid_certs(true)),
        }
    }

    /// Create a config with a fresh cookie jar (for session auth).
    pub fn with_cookie_jar(mut self) -> Self {
        self.cookie_jar = Some(Arc::new(Jar::default()));
        self
    }
}

/// A single blocking request/response exchange with the controller.
///
/// Implementations validate the response before handing back its body:
/// the media type must be JSON ([`Error::BadContentType`]) and the status
/// must be 2xx ([`Error::BadStatus`]), checked in that order. Session
/// cookies received on one call are replayed on every later call made
/// through the same instance.
pub trait Transport {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Bytes, Error>;
}

/// [`Transport`] over a blocking `reqwest` client with a cookie jar.
///
/// Not meant to be shared between threads issuing concurrent requests;
/// use one instance per caller when fetching in parallel.
pub struct HttpTransport {
    http: reqwest::blocking::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport rooted at the controller `base_url`.
    ///
    /// A cookie jar is attached if the config doesn't already carry one,
    /// since session auth depends on it.
    pub fn new(base_url: Url, config: &TransportConfig) -> Result<Self, Error> {
        let config = if config.cookie_jar.is_some() {
            config.clone()
        } else {
            config.clone().with_cookie_jar()
        };
        let http = config.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a transport around a pre-built client.
    pub fn with_client(http: reqwest::blocking::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Bytes, Error> {
        let url = self.url(path)?;
        debug!("{method} {url}");

        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let resp = builder.send()?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        if !is_json(&content_type) {
            return Err(Error::BadContentType { content_type });
        }
        if !status.is_success() {
            return Err(Error::BadStatus {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes()?;
        trace!(bytes = body.len(), "response body received");
        Ok(body)
    }
}

/// Media type comparison, ignoring parameters such as `charset`.
fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(JSON_CONTENT_TYPE))
}
