// ── Domain model ──
//
// Normalized entities handed to callers. Every value is built fresh per
// fetch and never mutated afterwards.

pub mod alarm;
pub mod device;
pub mod mac;
pub mod site;
pub mod station;

pub use alarm::Alarm;
pub use device::{
    Device, DeviceKind, DeviceStats, Nic, Radio, RadioBand, RadioStationStats, SystemStats,
    WiredStats, WirelessStats,
};
pub use mac::{MacAddress, ParseMacError};
pub use site::Site;
pub use station::{Station, StationStats};

use std::time::Duration;

use serde::Serializer;

/// Serialize a `Duration` as whole seconds.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn serialize_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_secs())
}
