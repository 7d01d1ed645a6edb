//! Registry configuration with TOML file support.
//!
//! Describes the construction-time state of a registry: owner hat, the
//! third-party registration flag, lock flag, clock mode and initial weights.
//! Hat ids and weights past the TOML integer range are written as decimal or
//! `0x`-hex strings.

use hatvote_types::{ClockMode, HatId, VoteWeight};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::RegistryError;

/// Construction parameters of a registry.
///
/// Can be loaded from a TOML file via [`RegistryConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Hat whose wearer may configure the registry.
    #[serde(default)]
    pub owner_hat: HatId,

    /// Whether accounts may be registered by someone other than themselves.
    #[serde(default)]
    pub third_party_registration: bool,

    /// Start out permanently locked.
    #[serde(default)]
    pub locked: bool,

    /// Unit of the clock registrations are stamped with.
    #[serde(default)]
    pub clock_mode: ClockMode,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Initial hat weights.
    #[serde(default)]
    pub weights: Vec<WeightEntry>,
}

/// One `[[weights]]` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub hat: HatId,
    pub weight: VoteWeight,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl RegistryConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| RegistryError::Config(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, RegistryError> {
        toml::from_str(s).map_err(|e| RegistryError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, RegistryError> {
        toml::to_string_pretty(self).map_err(|e| RegistryError::Config(e.to_string()))
    }

    /// Initial weights split into the parallel slices `set_weights` expects.
    pub fn weight_columns(&self) -> (Vec<HatId>, Vec<VoteWeight>) {
        self.weights.iter().map(|e| (e.hat, e.weight)).unzip()
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            owner_hat: HatId::default(),
            third_party_registration: false,
            locked: false,
            clock_mode: ClockMode::default(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            weights: Vec::new(),
        }
    }
}
