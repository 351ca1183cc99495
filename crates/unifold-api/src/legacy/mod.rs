// Legacy API client modules
//
// Hand-written client for the UniFi controller's legacy (non-OpenAPI)
// endpoints: session login, sites, and the site-scoped stat/ and list/
// collections, all wrapped in the `{ meta: { rc, msg }, data: [...] }`
// envelope.

pub mod alarms;
pub mod auth;
pub mod client;
pub mod devices;
pub mod models;
pub mod sites;
pub mod stations;

pub use client::{LegacyClient, parse_envelope};
