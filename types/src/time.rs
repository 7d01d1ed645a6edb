//! Logical-clock timepoints.
//!
//! Registrations are stamped with the ordering unit of the surrounding
//! execution environment, usually a block height. Wall-clock seconds are
//! supported as an alternative mode.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point on the logical clock (block number or unix seconds, per [`ClockMode`]).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timepoint(u64);

impl Timepoint {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Whether `self` lies strictly after `other`.
    pub fn is_after(&self, other: Timepoint) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for Timepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Which ordering unit the clock reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// Block height of the hosting chain.
    #[default]
    BlockNumber,
    /// Unix seconds.
    Timestamp,
}

impl ClockMode {
    /// Machine-readable descriptor reported to governance frameworks.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::BlockNumber => "mode=blocknumber&from=default",
            Self::Timestamp => "mode=timestamp",
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlockNumber => "blocknumber",
            Self::Timestamp => "timestamp",
        }
    }
}

/// Accepts the same lowercase names as the serde form, case-insensitively.
impl FromStr for ClockMode {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blocknumber" => Ok(Self::BlockNumber),
            "timestamp" => Ok(Self::Timestamp),
            other => Err(TypesError::UnknownClockMode(other.to_string())),
        }
    }
}
