//! Static hat holdings loaded from TOML.
//!
//! The command line has no live hats system to ask, so possession comes from
//! a holder table supplied per invocation:
//!
//! ```toml
//! [[holders]]
//! account = "0x0101010101010101010101010101010101010101"
//! hats = [1, 7, "0x00010002000000000000000000000000"]
//! ```
//!
//! Hat ids above the TOML integer range are given as decimal or hex strings.

use anyhow::Context;
use hatvote_oracle::HatsOracle;
use hatvote_types::{AccountAddress, HatId};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct HoldersFile {
    #[serde(default)]
    holders: Vec<HolderEntry>,
}

#[derive(Debug, Deserialize)]
struct HolderEntry {
    account: AccountAddress,
    #[serde(default)]
    hats: Vec<HatId>,
}

/// Who wears which hats, fixed for the lifetime of one command.
#[derive(Debug, Default)]
pub struct HolderTable {
    holdings: HashMap<AccountAddress, HashSet<HatId>>,
}

impl HolderTable {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let file: HoldersFile = toml::from_str(s).context("invalid holders table")?;
        let mut holdings: HashMap<AccountAddress, HashSet<HatId>> = HashMap::new();
        for entry in file.holders {
            holdings.entry(entry.account).or_default().extend(entry.hats);
        }
        Ok(Self { holdings })
    }

    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read holders file {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }
}

impl HatsOracle for HolderTable {
    fn is_holder(&self, account: &AccountAddress, hat: HatId) -> bool {
        self.holdings
            .get(account)
            .is_some_and(|hats| hats.contains(&hat))
    }
}
