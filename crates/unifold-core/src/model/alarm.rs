// ── Alarm domain type ──

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::mac::MacAddress;

/// An alarm raised by an access point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alarm {
    pub id: String,
    pub ap_mac: MacAddress,
    pub ap_name: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    /// Classification key, e.g. `EVT_AP_Lost_Contact`.
    pub key: String,
    pub subsystem: String,
    pub site_id: String,
    pub archived: bool,
}
