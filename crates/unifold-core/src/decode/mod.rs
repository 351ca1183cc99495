// ── Wire-to-domain decoding ──
//
// Each domain entity implements `Decode`: one raw JSON object is first
// deserialized into its `unifold_api` wire shape, then normalized field by
// field into the domain type. The first bad field aborts the entity; there
// is no partial result.

mod alarm;
mod device;
mod site;
mod station;

use std::net::IpAddr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use unifold_api::legacy::models::LooseNumber;

use crate::error::DecodeError;
use crate::model::MacAddress;

pub use alarm::ALARM_TIME_FORMAT;

/// Decode one wire object into a domain entity.
pub trait Decode: Sized {
    /// Entity name used in error context.
    const ENTITY: &'static str;

    /// Decode a single JSON object (not an envelope, not an array).
    fn decode(raw: &[u8]) -> Result<Self, DecodeError>;
}

/// Deserialize `raw` into wire shape `W`, then normalize it into `T`.
fn decode_via<W, T>(raw: &[u8]) -> Result<T, DecodeError>
where
    W: DeserializeOwned,
    T: TryFrom<W, Error = DecodeError>,
{
    let wire: W = serde_json::from_slice(raw)?;
    T::try_from(wire)
}

// ── Field helpers ────────────────────────────────────────────────────

/// Mandatory hardware address. Absent parses as the empty string and fails.
fn parse_mac(field: &'static str, raw: Option<&str>) -> Result<MacAddress, DecodeError> {
    let raw = raw.unwrap_or_default();
    raw.parse().map_err(|e| DecodeError::field(field, raw, e))
}

/// Optional hardware address: absent or empty means `None`.
fn parse_optional_mac(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<MacAddress>, DecodeError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => parse_mac(field, Some(s)).map(Some),
    }
}

/// Mandatory IPv4 or IPv6 address.
fn parse_ip(field: &'static str, raw: Option<&str>) -> Result<IpAddr, DecodeError> {
    let raw = raw.unwrap_or_default();
    raw.parse()
        .map_err(|e: std::net::AddrParseError| DecodeError::field(field, raw, e))
}

/// Epoch seconds to a UTC instant. Unset means the epoch itself.
fn epoch_to_datetime(field: &'static str, secs: Option<i64>) -> Result<DateTime<Utc>, DecodeError> {
    let secs = secs.unwrap_or_default();
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DecodeError::field(field, secs.to_string(), "timestamp out of range"))
}

/// Whole seconds to a `Duration`. Unset means zero.
fn secs_to_duration(field: &'static str, secs: Option<i64>) -> Result<Duration, DecodeError> {
    let secs = secs.unwrap_or_default();
    u64::try_from(secs)
        .map(Duration::from_secs)
        .map_err(|_| DecodeError::field(field, secs.to_string(), "negative duration"))
}

/// A counter sent as a number or a numeric string. Unset means zero.
fn loose_f64(field: &'static str, raw: Option<&LooseNumber>) -> Result<f64, DecodeError> {
    match raw {
        None => Ok(0.0),
        Some(LooseNumber::Number(n)) => n
            .as_f64()
            .ok_or_else(|| DecodeError::field(field, n.to_string(), "not representable as f64")),
        Some(LooseNumber::Text(s)) => {
            let n = numeric_text(field, s)?;
            n.as_f64()
                .ok_or_else(|| DecodeError::field(field, s, "not representable as f64"))
        }
    }
}

/// An unsigned integer sent as a number or a numeric string. Unset means zero.
fn loose_u64(field: &'static str, raw: Option<&LooseNumber>) -> Result<u64, DecodeError> {
    match raw {
        None => Ok(0),
        Some(LooseNumber::Number(n)) => n
            .as_u64()
            .ok_or_else(|| DecodeError::field(field, n.to_string(), "not a non-negative integer")),
        Some(LooseNumber::Text(s)) => numeric_text(field, s)?
            .as_u64()
            .ok_or_else(|| DecodeError::field(field, s, "not a non-negative integer")),
    }
}

/// The content of a numeric string, held to the JSON number grammar.
/// `NaN`, `inf`, a leading `+` and surrounding whitespace are all rejected.
fn numeric_text(field: &'static str, s: &str) -> Result<serde_json::Number, DecodeError> {
    if s.trim() != s {
        return Err(DecodeError::field(field, s, "surrounding whitespace"));
    }
    serde_json::from_str(s).map_err(|e| DecodeError::field(field, s, e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn text(s: &str) -> LooseNumber {
        LooseNumber::Text(s.to_owned())
    }

    #[test]
    fn optional_mac_tolerates_only_empty_or_absent() {
        assert_eq!(parse_optional_mac("AP MAC", None).unwrap(), None);
        assert_eq!(parse_optional_mac("AP MAC", Some("")).unwrap(), None);
        assert!(parse_optional_mac("AP MAC", Some("de:ad:be:ef:de:ad")).unwrap().is_some());

        let err = parse_optional_mac("AP MAC", Some("foo")).unwrap_err();
        assert_eq!(err.field_name(), Some("AP MAC"));
    }

    #[test]
    fn mandatory_mac_rejects_absent() {
        let err = parse_mac("MAC", None).unwrap_err();
        assert!(matches!(err, DecodeError::Field { field: "MAC", ref value, .. } if value.is_empty()));
    }

    #[test]
    fn ip_accepts_both_families() {
        assert_eq!(parse_ip("IP", Some("192.168.1.2")).unwrap().to_string(), "192.168.1.2");
        assert_eq!(parse_ip("IP", Some("fe80::1")).unwrap().to_string(), "fe80::1");
        assert!(parse_ip("IP", Some("192.168.1")).is_err());
        assert!(parse_ip("IP", None).is_err());
    }

    #[test]
    fn epoch_seconds_convert_to_utc() {
        assert_eq!(epoch_to_datetime("t", None).unwrap(), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(
            epoch_to_datetime("t", Some(1_451_606_400)).unwrap().to_rfc3339(),
            "2016-01-01T00:00:00+00:00"
        );
        assert!(epoch_to_datetime("t", Some(i64::MAX)).is_err());
    }

    #[test]
    fn durations_reject_negative_seconds() {
        assert_eq!(secs_to_duration("d", Some(61)).unwrap(), Duration::from_secs(61));
        assert_eq!(secs_to_duration("d", None).unwrap(), Duration::ZERO);
        assert!(secs_to_duration("d", Some(-1)).is_err());
    }

    #[test]
    fn loose_numbers_parse_strings_and_reject_garbage() {
        let n: LooseNumber = serde_json::from_str("80").unwrap();
        assert!((loose_f64("c", Some(&n)).unwrap() - 80.0).abs() < f64::EPSILON);
        assert!((loose_f64("c", Some(&text("55.7"))).unwrap() - 55.7).abs() < f64::EPSILON);
        assert!(loose_f64("c", Some(&text("lots"))).is_err());
        assert!(loose_f64("c", Some(&text(""))).is_err());

        assert_eq!(loose_u64("u", Some(&text("11622320"))).unwrap(), 11_622_320);
        assert_eq!(loose_u64("u", None).unwrap(), 0);
        let neg: LooseNumber = serde_json::from_str("-5").unwrap();
        assert!(loose_u64("u", Some(&neg)).is_err());
        assert!(loose_u64("u", Some(&text("1.5"))).is_err());
    }

    #[test]
    fn loose_numbers_hold_text_to_json_grammar() {
        for bad in ["NaN", "nan", "inf", "infinity", "-infinity", "+5", " 5", "5 ", "0x10", "1_000"] {
            let err = loose_f64("c", Some(&text(bad))).unwrap_err();
            assert_eq!(err.field_name(), Some("c"), "{bad:?}");
            assert!(loose_u64("u", Some(&text(bad))).is_err(), "{bad:?}");
        }
        assert!(loose_f64("c", Some(&text("1e400"))).is_err());
        assert!(loose_u64("u", Some(&text("1e3"))).is_err());

        assert!((loose_f64("c", Some(&text("-0.25"))).unwrap() + 0.25).abs() < f64::EPSILON);
        assert!((loose_f64("c", Some(&text("12"))).unwrap() - 12.0).abs() < f64::EPSILON);
        assert_eq!(loose_u64("u", Some(&text("0"))).unwrap(), 0);
    }
}
