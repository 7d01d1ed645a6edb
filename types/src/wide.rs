//! Serde form shared by the 128-bit newtypes.
//!
//! Binary encodings carry the raw `u128`. Human-readable formats get a plain
//! integer while the value fits a signed 64-bit integer (TOML's limit) and a
//! decimal string above that. Deserializing accepts integers, decimal strings
//! and `0x`-prefixed hex strings.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;
use std::num::ParseIntError;

/// Parse decimal or `0x`-prefixed hex.
pub(crate) fn parse_u128(s: &str) -> Result<u128, ParseIntError> {
    match s.strip_prefix("0x") {
        Some(digits) => u128::from_str_radix(digits, 16),
        None => s.parse::<u128>(),
    }
}

pub(crate) fn serialize<S: Serializer>(raw: u128, serializer: S) -> Result<S::Ok, S::Error> {
    if !serializer.is_human_readable() {
        return serializer.serialize_u128(raw);
    }
    match u64::try_from(raw) {
        Ok(small) if small <= i64::MAX as u64 => serializer.serialize_u64(small),
        _ => serializer.collect_str(&raw),
    }
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
    struct WideVisitor;

    impl<'de> Visitor<'de> for WideVisitor {
        type Value = u128;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a non-negative integer or a decimal/0x-hex string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(u128::from(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u128::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            parse_u128(v).map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    if deserializer.is_human_readable() {
        deserializer.deserialize_any(WideVisitor)
    } else {
        deserializer.deserialize_u128(WideVisitor)
    }
}
