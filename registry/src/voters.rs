//! Account → registration record.

use hatvote_types::{AccountAddress, HatId, Timepoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The hat an account registered under, and when.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    pub hat: HatId,
    pub registered_at: Timepoint,
}

/// One active registration per account; the latest write wins.
///
/// A record says nothing about whether the account still wears the hat.
/// Weight resolution re-asks the oracle every time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRegistry {
    records: BTreeMap<AccountAddress, VoterRecord>,
}

impl VoterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, account: &AccountAddress) -> Option<&VoterRecord> {
        self.records.get(account)
    }

    /// Whether `account`'s current record names exactly `hat`.
    pub fn is_registered_under(&self, account: &AccountAddress, hat: HatId) -> bool {
        self.records.get(account).is_some_and(|r| r.hat == hat)
    }

    /// Store a fresh record, returning the one it replaced.
    pub(crate) fn record(
        &mut self,
        account: AccountAddress,
        hat: HatId,
        registered_at: Timepoint,
    ) -> Option<VoterRecord> {
        self.records.insert(account, VoterRecord { hat, registered_at })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccountAddress, &VoterRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
