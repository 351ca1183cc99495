// Device normalization: scalars, inform address, NIC and radio tables,
// the per-radio statistics join, and the counter blocks.

use std::collections::HashMap;

use tracing::debug;
use url::Url;

use unifold_api::legacy::models::{
    LegacyDevice, LegacyDeviceStat, LegacyEthernetEntry, LegacyRadioEntry, LegacyRadioStatsEntry,
    LegacySysStats, LegacySystemStats, LegacyUplink,
};

use super::{Decode, decode_via, loose_f64, loose_u64, parse_ip, parse_mac};
use crate::error::DecodeError;
use crate::model::{
    Device, DeviceKind, DeviceStats, Nic, Radio, RadioBand, RadioStationStats, SystemStats,
    WiredStats, WirelessStats,
};

impl Decode for Device {
    const ENTITY: &'static str = "device";

    fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        decode_via::<LegacyDevice, _>(raw)
    }
}

impl TryFrom<LegacyDevice> for Device {
    type Error = DecodeError;

    fn try_from(d: LegacyDevice) -> Result<Self, Self::Error> {
        let kind = match d.device_type.as_deref() {
            None => DeviceKind::AccessPoint,
            Some(code) => {
                DeviceKind::from_wire(code).ok_or_else(|| DecodeError::UnsupportedKind {
                    kind: code.to_owned(),
                })?
            }
        };

        let inform_ip = parse_ip("inform IP", d.inform_ip.as_deref())?;
        let inform_url = parse_inform_url(d.inform_url.as_deref())?;

        let nics = d
            .ethernet_table
            .unwrap_or_default()
            .into_iter()
            .map(nic)
            .collect::<Result<Vec<_>, _>>()?;

        let radios = join_radios(
            d.radio_table.unwrap_or_default(),
            d.radio_table_stats.unwrap_or_default(),
        );

        let stats = device_stats(&StatBlocks {
            stat: d.stat.unwrap_or_default(),
            uplink: d.uplink.unwrap_or_default(),
            system: d.system_stats.unwrap_or_default(),
            sys: d.sys_stats.unwrap_or_default(),
        })?;

        let uptime = std::time::Duration::from_secs(loose_u64("uptime", d.uptime.as_ref())?);

        Ok(Self {
            id: d.id.unwrap_or_default(),
            kind,
            adopted: d.adopted.unwrap_or(false),
            inform_ip,
            inform_url,
            model: d.model.unwrap_or_default(),
            name: d.name.unwrap_or_default(),
            serial: d.serial.unwrap_or_default(),
            site_id: d.site_id.unwrap_or_default(),
            version: d.version.unwrap_or_default(),
            uptime,
            nics,
            radios,
            stats,
        })
    }
}

fn parse_inform_url(raw: Option<&str>) -> Result<Option<Url>, DecodeError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => Url::parse(s)
            .map(Some)
            .map_err(|e| DecodeError::field("inform URL", s, e)),
    }
}

fn nic(entry: LegacyEthernetEntry) -> Result<Nic, DecodeError> {
    Ok(Nic {
        mac: parse_mac("NIC MAC", entry.mac.as_deref())?,
        name: entry.name.unwrap_or_default(),
        num_port: entry.num_port,
    })
}

/// Build radios in configuration-table order and attach station counts
/// from the statistics row with the same name. Later duplicate rows win.
fn join_radios(table: Vec<LegacyRadioEntry>, stats: Vec<LegacyRadioStatsEntry>) -> Vec<Radio> {
    let by_name: HashMap<String, RadioStationStats> = stats
        .into_iter()
        .filter_map(|row| {
            let counts = RadioStationStats {
                stations: row.num_sta.unwrap_or(0),
                user_stations: row.user_num_sta.unwrap_or(0),
                guest_stations: row.guest_num_sta.unwrap_or(0),
            };
            row.name.map(|name| (name, counts))
        })
        .collect();

    let radios: Vec<Radio> = table
        .into_iter()
        .map(|entry| {
            let name = entry.name.unwrap_or_default();
            let code = entry.radio.unwrap_or_default();
            Radio {
                band: RadioBand::from_code(&code),
                stats: by_name.get(&name).copied(),
                builtin_antenna: entry.builtin_antenna.unwrap_or(false),
                builtin_antenna_gain: entry.builtin_antenna_gain.unwrap_or(0),
                max_tx_power: entry.max_tx_power.unwrap_or(0),
                min_tx_power: entry.min_tx_power.unwrap_or(0),
                name,
                code,
            }
        })
        .collect();

    let orphans = by_name
        .keys()
        .filter(|name| !radios.iter().any(|r| &r.name == *name))
        .count();
    if orphans > 0 {
        debug!(orphans, "radio statistics rows without a matching radio");
    }

    radios
}

struct StatBlocks {
    stat: LegacyDeviceStat,
    uplink: LegacyUplink,
    system: LegacySystemStats,
    sys: LegacySysStats,
}

fn device_stats(b: &StatBlocks) -> Result<DeviceStats, DecodeError> {
    let s = &b.stat;
    Ok(DeviceStats {
        total_bytes: loose_f64("stat.bytes", s.bytes.as_ref())?,
        all: WirelessStats {
            rx_bytes: loose_f64("stat.rx_bytes", s.rx_bytes.as_ref())?,
            rx_packets: loose_f64("stat.rx_packets", s.rx_packets.as_ref())?,
            tx_bytes: loose_f64("stat.tx_bytes", s.tx_bytes.as_ref())?,
            tx_dropped: loose_f64("stat.tx_dropped", s.tx_dropped.as_ref())?,
            tx_packets: loose_f64("stat.tx_packets", s.tx_packets.as_ref())?,
        },
        user: WirelessStats {
            rx_bytes: loose_f64("stat.user-rx_bytes", s.user_rx_bytes.as_ref())?,
            rx_packets: loose_f64("stat.user-rx_packets", s.user_rx_packets.as_ref())?,
            tx_bytes: loose_f64("stat.user-tx_bytes", s.user_tx_bytes.as_ref())?,
            tx_dropped: loose_f64("stat.user-tx_dropped", s.user_tx_dropped.as_ref())?,
            tx_packets: loose_f64("stat.user-tx_packets", s.user_tx_packets.as_ref())?,
        },
        guest: WirelessStats {
            rx_bytes: loose_f64("stat.guest-rx_bytes", s.guest_rx_bytes.as_ref())?,
            rx_packets: loose_f64("stat.guest-rx_packets", s.guest_rx_packets.as_ref())?,
            tx_bytes: loose_f64("stat.guest-tx_bytes", s.guest_tx_bytes.as_ref())?,
            tx_dropped: loose_f64("stat.guest-tx_dropped", s.guest_tx_dropped.as_ref())?,
            tx_packets: loose_f64("stat.guest-tx_packets", s.guest_tx_packets.as_ref())?,
        },
        uplink: WiredStats {
            rx_bytes: loose_f64("uplink.rx_bytes", b.uplink.rx_bytes.as_ref())?,
            rx_packets: loose_f64("uplink.rx_packets", b.uplink.rx_packets.as_ref())?,
            tx_bytes: loose_f64("uplink.tx_bytes", b.uplink.tx_bytes.as_ref())?,
            tx_packets: loose_f64("uplink.tx_packets", b.uplink.tx_packets.as_ref())?,
        },
        system: SystemStats {
            cpu_percent: loose_f64("system-stats.cpu", b.system.cpu.as_ref())?,
            mem_percent: loose_f64("system-stats.mem", b.system.mem.as_ref())?,
            uptime: loose_u64("system-stats.uptime", b.system.uptime.as_ref())?,
            load_1: loose_f64("sys_stats.loadavg_1", b.sys.load_1.as_ref())?,
            load_5: loose_f64("sys_stats.loadavg_5", b.sys.load_5.as_ref())?,
            load_15: loose_f64("sys_stats.loadavg_15", b.sys.load_15.as_ref())?,
            mem_buffer: loose_u64("sys_stats.mem_buffer", b.sys.mem_buffer.as_ref())?,
            mem_total: loose_u64("sys_stats.mem_total", b.sys.mem_total.as_ref())?,
            mem_used: loose_u64("sys_stats.mem_used", b.sys.mem_used.as_ref())?,
        },
    })
}
