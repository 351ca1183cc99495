//! Typed domain model and decoders for the UniFi controller legacy API.
//!
//! - **[`Controller`]**: blocking entity fetchers (`sites`, `devices`,
//!   `stations`, `alarms`) over a [`unifold_api::Transport`]. Each call is
//!   one request; elements are decoded in wire order and the first failure
//!   fails the call.
//!
//! - **[`Decode`]**: per-entity normalization from raw JSON into the
//!   [`model`] types. String-encoded counters, epoch seconds, MAC and IP
//!   text, the alarm timestamp layout, and the radio statistics join are
//!   all handled here.
//!
//! - **[`ControllerConfig`]**: connection settings built by the caller.
//!   This crate never reads configuration files.

pub mod config;
pub mod controller;
pub mod decode;
pub mod error;
pub mod model;

pub use config::{AuthCredentials, ControllerConfig, TlsVerification};
pub use controller::Controller;
pub use decode::Decode;
pub use error::{CoreError, DecodeError};
pub use model::{
    Alarm, Device, DeviceKind, DeviceStats, MacAddress, Nic, Radio, RadioBand, RadioStationStats,
    Site, Station, StationStats, SystemStats, WiredStats, WirelessStats,
};
pub use unifold_api::{ControllerPlatform, Error as ApiError};
