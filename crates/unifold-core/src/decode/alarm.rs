use chrono::{DateTime, NaiveDateTime, Utc};

use unifold_api::legacy::models::LegacyAlarm;

use super::{Decode, decode_via, parse_mac};
use crate::error::DecodeError;
use crate::model::Alarm;

/// The only accepted alarm timestamp layout: RFC 3339 in UTC with `Z`.
pub const ALARM_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

impl Decode for Alarm {
    const ENTITY: &'static str = "alarm";

    fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        decode_via::<LegacyAlarm, _>(raw)
    }
}

impl TryFrom<LegacyAlarm> for Alarm {
    type Error = DecodeError;

    fn try_from(a: LegacyAlarm) -> Result<Self, Self::Error> {
        let ap_mac = parse_mac("AP MAC", a.ap.as_deref())?;
        let timestamp = parse_timestamp(a.datetime.as_deref().unwrap_or_default())?;

        Ok(Self {
            id: a.id.unwrap_or_default(),
            ap_mac,
            ap_name: a.ap_name.unwrap_or_default(),
            timestamp,
            message: a.msg.unwrap_or_default(),
            key: a.key.unwrap_or_default(),
            subsystem: a.subsystem.unwrap_or_default(),
            site_id: a.site_id.unwrap_or_default(),
            archived: a.archived.unwrap_or(false),
        })
    }
}

/// Byte template for `ALARM_TIME_FORMAT`; `D` stands for any ASCII digit.
const ALARM_TIME_SHAPE: &[u8; 20] = b"DDDD-DD-DDTDD:DD:DDZ";

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DecodeError> {
    // chrono accepts single-digit fields and a signed year, so pin the shape first.
    let shaped = raw.len() == ALARM_TIME_SHAPE.len()
        && raw
            .bytes()
            .zip(ALARM_TIME_SHAPE)
            .all(|(b, &t)| if t == b'D' { b.is_ascii_digit() } else { b == t });
    if !shaped {
        return Err(DecodeError::field(
            "alarm datetime",
            raw,
            "expected YYYY-MM-DDTHH:MM:SSZ",
        ));
    }

    NaiveDateTime::parse_from_str(raw, ALARM_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| DecodeError::field("alarm datetime", raw, e))
}
