//! Owner-gated configuration state and the one-way lock.
//!
//! Every configuration entry point goes through [`ControlState::authorize`],
//! which is the only way to obtain a [`ConfigPermit`]. Mutating methods on the
//! control state and the weight table demand a permit, so a mutation that
//! skipped the lock/owner check does not type-check.

use crate::error::RegistryError;
use hatvote_oracle::HatsOracle;
use hatvote_types::{AccountAddress, HatId};
use serde::{Deserialize, Serialize};

/// Lock state machine: `Unlocked → Locked`, no way back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockState {
    #[default]
    Unlocked,
    Locked,
}

/// Proof that the current call passed the configuration guard.
///
/// Not constructible outside this crate.
#[derive(Debug)]
pub struct ConfigPermit {
    _private: (),
}

impl ConfigPermit {
    /// Only the guard and construction-time wiring mint permits.
    pub(crate) fn issue() -> Self {
        Self { _private: () }
    }
}

/// The three configuration scalars.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    owner_hat: HatId,
    third_party_registration: bool,
    lock: LockState,
}

impl ControlState {
    pub fn new(owner_hat: HatId, third_party_registration: bool) -> Self {
        Self {
            owner_hat,
            third_party_registration,
            lock: LockState::Unlocked,
        }
    }

    pub fn owner_hat(&self) -> HatId {
        self.owner_hat
    }

    pub fn third_party_registration(&self) -> bool {
        self.third_party_registration
    }

    pub fn lock_state(&self) -> LockState {
        self.lock
    }

    pub fn is_locked(&self) -> bool {
        self.lock == LockState::Locked
    }

    /// Whether `account` wears the owner hat right now.
    pub fn is_owner<H: HatsOracle>(&self, account: &AccountAddress, hats: &H) -> bool {
        hats.is_holder(account, self.owner_hat)
    }

    /// The configuration guard. Checks the lock first, then asks the oracle
    /// whether `caller` currently wears the owner hat.
    pub fn authorize<H: HatsOracle>(
        &self,
        caller: &AccountAddress,
        hats: &H,
    ) -> Result<ConfigPermit, RegistryError> {
        if self.is_locked() {
            return Err(RegistryError::Locked);
        }
        if !self.is_owner(caller, hats) {
            return Err(RegistryError::NotOwner {
                caller: *caller,
                owner_hat: self.owner_hat,
            });
        }
        Ok(ConfigPermit::issue())
    }

    pub fn set_owner_hat(&mut self, _permit: &ConfigPermit, hat: HatId) {
        self.owner_hat = hat;
    }

    pub fn set_third_party_registration(&mut self, _permit: &ConfigPermit, enabled: bool) {
        self.third_party_registration = enabled;
    }

    /// Consumes the permit: nothing else may be configured in the same call.
    pub fn lock(&mut self, _permit: ConfigPermit) {
        self.lock = LockState::Locked;
    }
}
