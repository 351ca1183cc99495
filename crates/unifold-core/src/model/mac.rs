// ── Hardware address ──

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A 48-bit hardware (MAC) address.
///
/// Parsed from six colon-separated hex octets (`de:ad:be:ef:de:ad`, either
/// case) and always displayed lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }
}

/// Input that isn't six colon-separated hex octets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid MAC address")]
pub struct ParseMacError;

impl FromStr for MacAddress {
    type Err = ParseMacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 6];
        let mut parts = s.split(':');

        for octet in &mut octets {
            let part = parts.next().ok_or(ParseMacError)?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ParseMacError);
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| ParseMacError)?;
        }

        if parts.next().is_some() {
            return Err(ParseMacError);
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{octet:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_either_case_and_displays_lowercase() {
        let mac: MacAddress = "DE:AD:be:EF:de:ad".parse().unwrap();
        assert_eq!(mac.octets(), [0xde, 0xad, 0xbe, 0xef, 0xde, 0xad]);
        assert_eq!(mac.to_string(), "de:ad:be:ef:de:ad");
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "",
            "foo",
            "de:ad:be:ef:de",
            "de:ad:be:ef:de:ad:00",
            "de-ad-be-ef-de-ad",
            "dead.beef.dead",
            "de:ad:be:ef:de:a",
            "de:ad:be:ef:de:+a",
            "de:ad:be:ef:de:zz",
        ] {
            assert_eq!(bad.parse::<MacAddress>(), Err(ParseMacError), "{bad:?}");
        }
    }

    #[test]
    fn serializes_as_string() {
        let mac = MacAddress::new([0xab, 0xad, 0x1d, 0xea, 0xab, 0xad]);
        assert_eq!(serde_json::to_string(&mac).unwrap(), r#""ab:ad:1d:ea:ab:ad""#);
    }
}
