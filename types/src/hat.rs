//! Hat (credential) identifiers.

use crate::error::TypesError;
use crate::wide;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier of a hat issued by the external hats system.
///
/// The registry never interprets the bits; it only compares ids and uses
/// them as keys. Ids past the TOML integer range serialize as strings in
/// text formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HatId(u128);

impl HatId {
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }
}

impl From<u128> for HatId {
    fn from(raw: u128) -> Self {
        Self(raw)
    }
}

/// Accepts decimal or `0x`-prefixed hex.
impl FromStr for HatId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        wide::parse_u128(s)
            .map(Self)
            .map_err(|e| TypesError::InvalidHatId(format!("{s}: {e}")))
    }
}

impl Serialize for HatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        wide::serialize(self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for HatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        wide::deserialize(deserializer).map(Self)
    }
}

impl fmt::Display for HatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hat#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!("42".parse::<HatId>().unwrap(), HatId::new(42));
        assert_eq!("0x2a".parse::<HatId>().unwrap(), HatId::new(42));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            "hat".parse::<HatId>(),
            Err(TypesError::InvalidHatId(_))
        ));
        assert!("-1".parse::<HatId>().is_err());
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holding {
        hats: Vec<HatId>,
    }

    #[test]
    fn toml_accepts_integers_and_strings() {
        let holding: Holding = toml::from_str(r#"hats = [1, "7", "0x10"]"#).unwrap();
        assert_eq!(
            holding.hats,
            vec![HatId::new(1), HatId::new(7), HatId::new(16)]
        );
        assert!(toml::from_str::<Holding>("hats = [-1]").is_err());
    }

    #[test]
    fn toml_round_trips_full_width_ids() {
        let holding = Holding {
            hats: vec![HatId::new(3), HatId::new(u128::MAX)],
        };
        let text = toml::to_string(&holding).unwrap();
        assert_eq!(toml::from_str::<Holding>(&text).unwrap(), holding);
    }

    #[test]
    fn bincode_keeps_raw_u128() {
        let hat = HatId::new(u128::MAX - 1);
        let bytes = bincode::serialize(&hat).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bincode::deserialize::<HatId>(&bytes).unwrap(), hat);
    }
}
