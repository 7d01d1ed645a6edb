//! Nullable hats oracle — in-memory hat holdings for testing.

use hatvote_oracle::HatsOracle;
use hatvote_types::{AccountAddress, HatId};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// An in-memory hats oracle.
///
/// Holdings change only through [`NullHats::grant`] and [`NullHats::revoke`].
/// Every `is_holder` call is counted so tests can assert that possession is
/// re-checked instead of cached.
pub struct NullHats {
    holdings: Mutex<HashSet<(AccountAddress, HatId)>>,
    queries: AtomicUsize,
}

impl NullHats {
    pub fn new() -> Self {
        Self {
            holdings: Mutex::new(HashSet::new()),
            queries: AtomicUsize::new(0),
        }
    }

    /// Give `hat` to `account`.
    pub fn grant(&self, account: &AccountAddress, hat: HatId) {
        self.holdings.lock().unwrap().insert((*account, hat));
    }

    /// Take `hat` away from `account`.
    pub fn revoke(&self, account: &AccountAddress, hat: HatId) {
        self.holdings.lock().unwrap().remove(&(*account, hat));
    }

    /// Number of `is_holder` calls answered so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Default for NullHats {
    fn default() -> Self {
        Self::new()
    }
}

impl HatsOracle for NullHats {
    fn is_holder(&self, account: &AccountAddress, hat: HatId) -> bool {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.holdings.lock().unwrap().contains(&(*account, hat))
    }
}
