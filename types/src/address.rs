//! Account address type with `0x` prefix.

use crate::error::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 20-byte account address, rendered as `0x`-prefixed lowercase hex.
///
/// Serialized in its string form so that TOML holder tables and binary
/// state snapshots share one representation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountAddress([u8; 20]);

impl AccountAddress {
    /// The standard prefix for rendered addresses.
    pub const PREFIX: &'static str = "0x";

    pub const ZERO: Self = Self([0u8; 20]);

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Build an address whose every byte is `seed`. Handy for fixtures.
    pub fn repeat_byte(seed: u8) -> Self {
        Self([seed; 20])
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl FromStr for AccountAddress {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| TypesError::InvalidAddress(format!("{s}: missing 0x prefix")))?;
        let raw = hex::decode(digits)
            .map_err(|e| TypesError::InvalidAddress(format!("{s}: {e}")))?;
        let bytes: [u8; 20] = raw.try_into().map_err(|raw: Vec<u8>| {
            TypesError::InvalidAddress(format!("{s}: expected 20 bytes, got {}", raw.len()))
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, hex::encode(self.0))
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress(0x{}..)", hex::encode(&self.0[..4]))
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
