// ── Station domain types ──

use std::net::IpAddr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::mac::MacAddress;

/// A client currently associated with the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub id: String,
    pub mac: MacAddress,
    /// Access point the station is associated with. Absent for wired
    /// stations, where the controller sends an empty string.
    pub ap_mac: Option<MacAddress>,
    pub ip: IpAddr,
    pub site_id: String,
    pub user_id: String,
    pub hostname: String,
    /// Name assigned on the controller, if any.
    pub name: String,
    pub associated_at: DateTime<Utc>,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    #[serde(serialize_with = "super::serialize_secs")]
    pub idle_time: Duration,
    #[serde(serialize_with = "super::serialize_secs")]
    pub uptime: Duration,
    pub roam_count: u32,
    pub channel: u32,
    pub noise: i32,
    pub rssi: i32,
    pub stats: StationStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StationStats {
    pub rx_bytes: u64,
    pub rx_packets: u64,
    pub rx_rate: u64,
    pub tx_bytes: u64,
    pub tx_packets: u64,
    pub tx_power: i32,
    pub tx_rate: u64,
}
