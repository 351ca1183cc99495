// Legacy API wire shapes
//
// Raw models for the UniFi controller's legacy JSON API. Every field is
// `Option` because the API is inconsistent about presence and nullness
// across firmware versions; `unifold-core` decides which absences are
// errors. Counters inside the device statistics blocks use `LooseNumber`
// since the controller encodes some of them as strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

// ── Response Envelope ────────────────────────────────────────────────

/// Standard UniFi legacy API response envelope.
///
/// ```json
/// { "meta": { "rc": "ok", "msg": "optional" }, "data": [...] }
/// ```
///
/// `meta` is optional: older controllers and some proxies send only `data`.
#[derive(Debug, Deserialize)]
pub struct LegacyResponse<T> {
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub data: Vec<T>,
}

/// Metadata from the legacy envelope. `rc` == `"ok"` means success.
#[derive(Debug, Deserialize)]
pub struct Meta {
    pub rc: String,
    #[serde(default)]
    pub msg: Option<String>,
}

/// One entity from the `data` array, kept as unparsed JSON text so each
/// element can be decoded (and fail) on its own.
pub type RawEntity = Box<RawValue>;

// ── Loose numbers ────────────────────────────────────────────────────

/// A numeric field the controller sends either as a JSON number or as a
/// string holding a number (`"55.7"`, `"11622320"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// ── Device ───────────────────────────────────────────────────────────

/// Device object from `stat/device`.
///
/// The legacy API returns 100+ fields per device; only the ones the
/// domain model needs are modelled, everything else is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyDevice {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    /// `uap`, `usw`, `ugw`, `udm`, ...
    #[serde(default, rename = "type")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub adopted: Option<bool>,
    #[serde(default)]
    pub inform_ip: Option<String>,
    #[serde(default)]
    pub inform_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub site_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Seconds. Older firmware sends this as a string.
    #[serde(default)]
    pub uptime: Option<LooseNumber>,
    #[serde(default)]
    pub ethernet_table: Option<Vec<LegacyEthernetEntry>>,
    #[serde(default)]
    pub radio_table: Option<Vec<LegacyRadioEntry>>,
    #[serde(default)]
    pub radio_table_stats: Option<Vec<LegacyRadioStatsEntry>>,
    #[serde(default)]
    pub stat: Option<LegacyDeviceStat>,
    #[serde(default)]
    pub uplink: Option<LegacyUplink>,
    #[serde(default, rename = "system-stats")]
    pub system_stats: Option<LegacySystemStats>,
    #[serde(default)]
    pub sys_stats: Option<LegacySysStats>,
}

/// Wired interface row from `ethernet_table`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyEthernetEntry {
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub num_port: Option<u32>,
}

/// Radio configuration row from `radio_table`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyRadioEntry {
    #[serde(default)]
    pub name: Option<String>,
    /// Radio technology code: `ng` (2.4 GHz), `na` (5 GHz), ...
    #[serde(default)]
    pub radio: Option<String>,
    #[serde(default)]
    pub builtin_antenna: Option<bool>,
    #[serde(default, rename = "builtin_ant_gain")]
    pub builtin_antenna_gain: Option<i32>,
    #[serde(default, rename = "max_txpower")]
    pub max_tx_power: Option<i32>,
    #[serde(default, rename = "min_txpower")]
    pub min_tx_power: Option<i32>,
}

/// Per-radio statistics row from `radio_table_stats`, keyed by `name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyRadioStatsEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub num_sta: Option<u32>,
    #[serde(default, rename = "user-num_sta")]
    pub user_num_sta: Option<u32>,
    #[serde(default, rename = "guest-num_sta")]
    pub guest_num_sta: Option<u32>,
}

/// Traffic counters nested under `stat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyDeviceStat {
    #[serde(default)]
    pub bytes: Option<LooseNumber>,
    #[serde(default)]
    pub rx_bytes: Option<LooseNumber>,
    #[serde(default)]
    pub rx_packets: Option<LooseNumber>,
    #[serde(default)]
    pub tx_bytes: Option<LooseNumber>,
    #[serde(default)]
    pub tx_dropped: Option<LooseNumber>,
    #[serde(default)]
    pub tx_packets: Option<LooseNumber>,
    #[serde(default, rename = "user-rx_bytes")]
    pub user_rx_bytes: Option<LooseNumber>,
    #[serde(default, rename = "user-rx_packets")]
    pub user_rx_packets: Option<LooseNumber>,
    #[serde(default, rename = "user-tx_bytes")]
    pub user_tx_bytes: Option<LooseNumber>,
    #[serde(default, rename = "user-tx_dropped")]
    pub user_tx_dropped: Option<LooseNumber>,
    #[serde(default, rename = "user-tx_packets")]
    pub user_tx_packets: Option<LooseNumber>,
    #[serde(default, rename = "guest-rx_bytes")]
    pub guest_rx_bytes: Option<LooseNumber>,
    #[serde(default, rename = "guest-rx_packets")]
    pub guest_rx_packets: Option<LooseNumber>,
    #[serde(default, rename = "guest-tx_bytes")]
    pub guest_tx_bytes: Option<LooseNumber>,
    #[serde(default, rename = "guest-tx_dropped")]
    pub guest_tx_dropped: Option<LooseNumber>,
    #[serde(default, rename = "guest-tx_packets")]
    pub guest_tx_packets: Option<LooseNumber>,
}

/// Wired uplink counters nested under `uplink`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyUplink {
    #[serde(default)]
    pub rx_bytes: Option<LooseNumber>,
    #[serde(default)]
    pub rx_packets: Option<LooseNumber>,
    #[serde(default)]
    pub tx_bytes: Option<LooseNumber>,
    #[serde(default)]
    pub tx_packets: Option<LooseNumber>,
}

/// The `system-stats` block. Every value arrives as a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacySystemStats {
    #[serde(default)]
    pub cpu: Option<LooseNumber>,
    #[serde(default)]
    pub mem: Option<LooseNumber>,
    #[serde(default)]
    pub uptime: Option<LooseNumber>,
}

/// The `sys_stats` block: load averages as strings, memory as numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacySysStats {
    #[serde(default, rename = "loadavg_1")]
    pub load_1: Option<LooseNumber>,
    #[serde(default, rename = "loadavg_5")]
    pub load_5: Option<LooseNumber>,
    #[serde(default, rename = "loadavg_15")]
    pub load_15: Option<LooseNumber>,
    #[serde(default)]
    pub mem_buffer: Option<LooseNumber>,
    #[serde(default)]
    pub mem_total: Option<LooseNumber>,
    #[serde(default)]
    pub mem_used: Option<LooseNumber>,
}

// ── Station ──────────────────────────────────────────────────────────

/// Connected client from `stat/sta`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyStation {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub ap_mac: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub site_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Epoch seconds.
    #[serde(default)]
    pub assoc_time: Option<i64>,
    /// Epoch seconds.
    #[serde(default)]
    pub first_seen: Option<i64>,
    /// Epoch seconds.
    #[serde(default)]
    pub last_seen: Option<i64>,
    /// Seconds.
    #[serde(default)]
    pub idletime: Option<i64>,
    /// Seconds.
    #[serde(default)]
    pub uptime: Option<i64>,
    #[serde(default)]
    pub roam_count: Option<u32>,
    #[serde(default)]
    pub channel: Option<u32>,
    #[serde(default)]
    pub noise: Option<i32>,
    #[serde(default)]
    pub rssi: Option<i32>,
    #[serde(default)]
    pub rx_bytes: Option<u64>,
    #[serde(default)]
    pub rx_packets: Option<u64>,
    #[serde(default)]
    pub rx_rate: Option<u64>,
    #[serde(default)]
    pub tx_bytes: Option<u64>,
    #[serde(default)]
    pub tx_packets: Option<u64>,
    #[serde(default)]
    pub tx_power: Option<i32>,
    #[serde(default)]
    pub tx_rate: Option<u64>,
}

// ── Alarm ────────────────────────────────────────────────────────────

/// Alarm object from `list/alarm`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyAlarm {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    /// MAC of the access point that raised the alarm.
    #[serde(default)]
    pub ap: Option<String>,
    #[serde(default)]
    pub ap_name: Option<String>,
    /// `2016-01-01T00:00:00Z`
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub site_id: Option<String>,
    #[serde(default)]
    pub subsystem: Option<String>,
    #[serde(default)]
    pub archived: Option<bool>,
}

// ── Site ─────────────────────────────────────────────────────────────

/// Site object from `/api/self/sites`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacySite {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}
