use unifold_api::legacy::models::LegacyStation;

use super::{
    Decode, decode_via, epoch_to_datetime, parse_ip, parse_mac, parse_optional_mac,
    secs_to_duration,
};
use crate::error::DecodeError;
use crate::model::{Station, StationStats};

impl Decode for Station {
    const ENTITY: &'static str = "station";

    fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        decode_via::<LegacyStation, _>(raw)
    }
}

impl TryFrom<LegacyStation> for Station {
    type Error = DecodeError;

    fn try_from(s: LegacyStation) -> Result<Self, Self::Error> {
        let mac = parse_mac("station MAC", s.mac.as_deref())?;
        let ap_mac = parse_optional_mac("AP MAC", s.ap_mac.as_deref())?;
        let ip = parse_ip("station IP", s.ip.as_deref())?;

        Ok(Self {
            id: s.id.unwrap_or_default(),
            mac,
            ap_mac,
            ip,
            site_id: s.site_id.unwrap_or_default(),
            user_id: s.user_id.unwrap_or_default(),
            hostname: s.hostname.unwrap_or_default(),
            name: s.name.unwrap_or_default(),
            associated_at: epoch_to_datetime("assoc_time", s.assoc_time)?,
            first_seen: epoch_to_datetime("first_seen", s.first_seen)?,
            last_seen: epoch_to_datetime("last_seen", s.last_seen)?,
            idle_time: secs_to_duration("idletime", s.idletime)?,
            uptime: secs_to_duration("uptime", s.uptime)?,
            roam_count: s.roam_count.unwrap_or(0),
            channel: s.channel.unwrap_or(0),
            noise: s.noise.unwrap_or(0),
            rssi: s.rssi.unwrap_or(0),
            stats: StationStats {
                rx_bytes: s.rx_bytes.unwrap_or(0),
                rx_packets: s.rx_packets.unwrap_or(0),
                rx_rate: s.rx_rate.unwrap_or(0),
                tx_bytes: s.tx_bytes.unwrap_or(0),
                tx_packets: s.tx_packets.unwrap_or(0),
                tx_power: s.tx_power.unwrap_or(0),
                tx_rate: s.tx_rate.unwrap_or(0),
            },
        })
    }
}
