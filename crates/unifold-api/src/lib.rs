// unifold-api: Blocking Rust client for the UniFi controller legacy API
//
// Transport mechanics (TLS, cookies, content-type and status checks), the
// `{ data: [...] }` envelope, and the raw wire shapes the controller sends.
// Normalization into typed domain values happens in `unifold-core`.

pub mod auth;
pub mod error;
pub mod legacy;
pub mod transport;

pub use auth::ControllerPlatform;
pub use error::Error;
pub use legacy::LegacyClient;
pub use reqwest::Method;
pub use transport::{HttpTransport, JSON_CONTENT_TYPE, TlsMode, Transport, TransportConfig};
