// ── Device domain types ──

use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

use serde::Serialize;
use url::Url;

use super::mac::MacAddress;

/// Hardware class, from the wire `type` discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// `uap`
    AccessPoint,
    /// `usw`
    Switch,
    /// `ugw`, `udm`, `uxg`
    Gateway,
}

impl DeviceKind {
    /// Map a wire discriminant to a kind. `None` for unknown hardware.
    pub fn from_wire(code: &str) -> Option<Self> {
        match code {
            "uap" => Some(Self::AccessPoint),
            "usw" => Some(Self::Switch),
            "ugw" | "udm" | "uxg" => Some(Self::Gateway),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AccessPoint => "access point",
            Self::Switch => "switch",
            Self::Gateway => "gateway",
        })
    }
}

/// An adopted (or adoptable) piece of UniFi hardware.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub id: String,
    pub kind: DeviceKind,
    pub adopted: bool,
    pub inform_ip: IpAddr,
    /// Absent when the controller sends no URL (or an empty one).
    pub inform_url: Option<Url>,
    pub model: String,
    pub name: String,
    pub serial: String,
    pub site_id: String,
    pub version: String,
    #[serde(serialize_with = "super::serialize_secs")]
    pub uptime: Duration,
    /// Wired interfaces, in wire order. Empty, never absent.
    pub nics: Vec<Nic>,
    /// Radios, in wire order. Empty, never absent.
    pub radios: Vec<Radio>,
    pub stats: DeviceStats,
}

/// Wired network interface owned by a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nic {
    pub mac: MacAddress,
    pub name: String,
    pub num_port: Option<u32>,
}

/// Frequency band of a radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RadioBand {
    #[serde(rename = "2.4GHz")]
    Ghz2_4,
    #[serde(rename = "5GHz")]
    Ghz5,
}

impl RadioBand {
    /// Classify a radio technology code: `ng` and `na`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ng" => Some(Self::Ghz2_4),
            "na" => Some(Self::Ghz5),
            _ => None,
        }
    }
}

impl fmt::Display for RadioBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ghz2_4 => "2.4GHz",
            Self::Ghz5 => "5GHz",
        })
    }
}

/// Radio owned by an access point. Identified by `name` within its device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Radio {
    pub name: String,
    /// The raw technology code, kept for bands this crate doesn't classify.
    pub code: String,
    pub band: Option<RadioBand>,
    pub builtin_antenna: bool,
    pub builtin_antenna_gain: i32,
    pub max_tx_power: i32,
    pub min_tx_power: i32,
    /// Present only when the statistics table had a row with this name.
    pub stats: Option<RadioStationStats>,
}

/// Station counts for one radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RadioStationStats {
    pub stations: u32,
    pub user_stations: u32,
    pub guest_stations: u32,
}

/// Aggregated device counters.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DeviceStats {
    pub total_bytes: f64,
    pub all: WirelessStats,
    pub user: WirelessStats,
    pub guest: WirelessStats,
    pub uplink: WiredStats,
    pub system: SystemStats,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WirelessStats {
    pub rx_bytes: f64,
    pub rx_packets: f64,
    pub tx_bytes: f64,
    pub tx_dropped: f64,
    pub tx_packets: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WiredStats {
    pub rx_bytes: f64,
    pub rx_packets: f64,
    pub tx_bytes: f64,
    pub tx_packets: f64,
}

/// Host-level figures from the `system-stats` and `sys_stats` blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SystemStats {
    pub cpu_percent: f64,
    pub mem_percent: f64,
    /// Seconds.
    pub uptime: u64,
    pub load_1: f64,
    pub load_5: f64,
    pub load_15: f64,
    pub mem_buffer: u64,
    pub mem_total: u64,
    pub mem_used: u64,
}
