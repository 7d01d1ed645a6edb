//! Vote weight type.
//!
//! Weights are plain non-negative integers (u128). Zero means "confers no
//! voting power" and is also what an unconfigured hat resolves to.

use crate::wide;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Governance voting power attached to a hat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VoteWeight(u128);

impl VoteWeight {
    pub const ZERO: Self = Self(0);

    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u128> for VoteWeight {
    fn from(raw: u128) -> Self {
        Self(raw)
    }
}

impl Serialize for VoteWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        wide::serialize(self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for VoteWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        wide::deserialize(deserializer).map(Self)
    }
}

impl fmt::Display for VoteWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} votes", self.0)
    }
}
