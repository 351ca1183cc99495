use unifold_api::legacy::models::LegacySite;

use super::{Decode, decode_via};
use crate::error::DecodeError;
use crate::model::Site;

impl Decode for Site {
    const ENTITY: &'static str = "site";

    fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        decode_via::<LegacySite, _>(raw)
    }
}

impl TryFrom<LegacySite> for Site {
    type Error = DecodeError;

    fn try_from(s: LegacySite) -> Result<Self, Self::Error> {
        Ok(Self {
            id: s.id.unwrap_or_default(),
            name: s.name.unwrap_or_default(),
            description: s.desc.unwrap_or_default(),
            role: s.role,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn passthrough() {
        let site = Site::decode(
            br#"{"_id":"5696b2b5e4b0a8a9b7f4d3cb","name":"default","desc":"Default","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(site.id, "5696b2b5e4b0a8a9b7f4d3cb");
        assert_eq!(site.name, "default");
        assert_eq!(site.description, "Default");
        assert_eq!(site.role.as_deref(), Some("admin"));
    }

    #[test]
    fn missing_fields_are_empty() {
        let site = Site::decode(b"{}").unwrap();
        assert!(site.name.is_empty());
        assert_eq!(site.role, None);
        assert!(matches!(Site::decode(b"["), Err(DecodeError::Syntax(_))));
    }
}
