//! The voting registry — binds accounts to hats and resolves their weight.

use crate::config::RegistryConfig;
use crate::control::{ConfigPermit, ControlState};
use crate::error::RegistryError;
use crate::events::RegistryEvent;
use crate::votes::{DelegationSignature, Votes};
use crate::voters::{VoterRecord, VoterRegistry};
use crate::weights::WeightTable;
use hatvote_oracle::{Clock, HatsOracle};
use hatvote_types::{AccountAddress, ClockMode, HatId, Timepoint, VoteWeight};

/// Who a registration is being performed for.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Registrant<'a> {
    /// The caller registers itself.
    Caller(&'a AccountAddress),
    /// Someone else (another account, or the issuance hook) registers `account`.
    ThirdParty(&'a AccountAddress),
}

/// Fails unless `clock` reports in `expected` units.
pub(crate) fn ensure_clock_mode<C: Clock>(
    expected: ClockMode,
    clock: &C,
) -> Result<(), RegistryError> {
    if expected != clock.mode() {
        return Err(RegistryError::Config(format!(
            "expected a {} clock but got {}",
            expected.as_str(),
            clock.mode().as_str()
        )));
    }
    Ok(())
}

/// Hat-based voting-weight registry.
///
/// Owns the weight table, the voter registry and the control state. The hats
/// oracle and the clock are external; possession is re-checked on every
/// query and on every configuration call.
pub struct HatsVotes<H, C> {
    hats: H,
    pub(crate) clock: C,
    pub(crate) weights: WeightTable,
    pub(crate) voters: VoterRegistry,
    pub(crate) control: ControlState,
    events: Vec<RegistryEvent>,
}

impl<H: HatsOracle, C: Clock> HatsVotes<H, C> {
    /// A fresh, unlocked registry with an empty weight table.
    pub fn new(hats: H, clock: C, owner_hat: HatId, third_party_registration: bool) -> Self {
        Self::from_parts(
            hats,
            clock,
            WeightTable::new(),
            VoterRegistry::new(),
            ControlState::new(owner_hat, third_party_registration),
        )
    }

    /// Wire up a registry from its construction config.
    ///
    /// Initial weights are applied without the owner gate. Fails if the
    /// config's clock mode disagrees with `clock`.
    pub fn from_config(config: &RegistryConfig, hats: H, clock: C) -> Result<Self, RegistryError> {
        ensure_clock_mode(config.clock_mode, &clock)?;
        let permit = ConfigPermit::issue();
        let (hat_ids, weights) = config.weight_columns();
        let mut table = WeightTable::new();
        table.set_weights(&permit, &hat_ids, &weights)?;

        let mut control = ControlState::new(config.owner_hat, config.third_party_registration);
        if config.locked {
            control.lock(permit);
        }
        tracing::info!(
            owner_hat = %control.owner_hat(),
            weights = table.len(),
            locked = control.is_locked(),
            "registry constructed from config"
        );
        Ok(Self::from_parts(hats, clock, table, VoterRegistry::new(), control))
    }

    pub(crate) fn from_parts(
        hats: H,
        clock: C,
        weights: WeightTable,
        voters: VoterRegistry,
        control: ControlState,
    ) -> Self {
        Self {
            hats,
            clock,
            weights,
            voters,
            control,
            events: Vec::new(),
        }
    }

    // ── Read-only accessors ─────────────────────────────────────────────

    pub fn owner_hat(&self) -> HatId {
        self.control.owner_hat()
    }

    pub fn third_party_registration(&self) -> bool {
        self.control.third_party_registration()
    }

    pub fn is_locked(&self) -> bool {
        self.control.is_locked()
    }

    /// Whether `account` wears the owner hat right now.
    pub fn is_owner(&self, account: &AccountAddress) -> bool {
        self.control.is_owner(account, &self.hats)
    }

    pub fn hat_weight(&self, hat: HatId) -> VoteWeight {
        self.weights.weight(hat)
    }

    /// The stored registration of `account`, whether or not it is still backed by the hat.
    pub fn voter(&self, account: &AccountAddress) -> Option<VoterRecord> {
        self.voters.get(account).copied()
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn voters(&self) -> &VoterRegistry {
        &self.voters
    }

    pub fn control(&self) -> &ControlState {
        &self.control
    }

    /// Hand all buffered events to the caller, oldest first.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Owner-gated configuration ───────────────────────────────────────

    fn authorize(&self, caller: &AccountAddress) -> Result<ConfigPermit, RegistryError> {
        self.control.authorize(caller, &self.hats).map_err(|e| {
            tracing::debug!(caller = %caller, error = %e, "configuration call rejected");
            e
        })
    }

    /// Hand configuration rights to whoever wears `hat`.
    pub fn set_owner_hat(
        &mut self,
        caller: &AccountAddress,
        hat: HatId,
    ) -> Result<(), RegistryError> {
        let permit = self.authorize(caller)?;
        self.control.set_owner_hat(&permit, hat);
        tracing::info!(caller = %caller, owner_hat = %hat, "owner hat updated");
        self.events.push(RegistryEvent::OwnerHatSet(hat));
        Ok(())
    }

    pub fn set_third_party_registration(
        &mut self,
        caller: &AccountAddress,
        enabled: bool,
    ) -> Result<(), RegistryError> {
        let permit = self.authorize(caller)?;
        self.control.set_third_party_registration(&permit, enabled);
        tracing::info!(caller = %caller, enabled, "third-party registration toggled");
        self.events
            .push(RegistryEvent::ThirdPartyRegistrationSet(enabled));
        Ok(())
    }

    /// Bulk-assign hat weights. All-or-nothing.
    pub fn set_weights(
        &mut self,
        caller: &AccountAddress,
        hats: &[HatId],
        weights: &[VoteWeight],
    ) -> Result<(), RegistryError> {
        let permit = self.authorize(caller)?;
        self.weights.set_weights(&permit, hats, weights)?;
        tracing::info!(caller = %caller, entries = hats.len(), "hat weights updated");
        self.events.push(RegistryEvent::WeightsSet {
            hats: hats.to_vec(),
            weights: weights.to_vec(),
        });
        Ok(())
    }

    /// Freeze all configuration for good.
    pub fn lock(&mut self, caller: &AccountAddress) -> Result<(), RegistryError> {
        let permit = self.authorize(caller)?;
        self.control.lock(permit);
        tracing::info!(caller = %caller, "registry configuration locked");
        self.events.push(RegistryEvent::Locked);
        Ok(())
    }

    // ── Registration ────────────────────────────────────────────────────

    /// Register the caller under `hat`.
    pub fn register(
        &mut self,
        caller: &AccountAddress,
        hat: HatId,
    ) -> Result<VoterRecord, RegistryError> {
        self.register_as(Registrant::Caller(caller), hat)
    }

    /// Register `account` under `hat` on its behalf.
    ///
    /// Needs third-party registration to be enabled unless `account` is the
    /// caller itself.
    pub fn register_for(
        &mut self,
        caller: &AccountAddress,
        account: &AccountAddress,
        hat: HatId,
    ) -> Result<VoterRecord, RegistryError> {
        let registrant = if caller == account {
            Registrant::Caller(caller)
        } else {
            Registrant::ThirdParty(account)
        };
        self.register_as(registrant, hat)
    }

    /// The single registration path shared by self-service, third-party and
    /// issuance-hook registration. Every check runs before the one write.
    pub(crate) fn register_as(
        &mut self,
        registrant: Registrant<'_>,
        hat: HatId,
    ) -> Result<VoterRecord, RegistryError> {
        let result = self.check_registration(registrant, hat);
        let account = match result {
            Ok(account) => account,
            Err(e) => {
                tracing::debug!(?registrant, hat = %hat, error = %e, "registration rejected");
                return Err(e);
            }
        };

        let at = self.clock.now();
        let previous = self.voters.record(account, hat, at);
        tracing::info!(
            account = %account,
            hat = %hat,
            at = %at,
            replaced = ?previous.map(|r| r.hat),
            "voter registered"
        );
        self.events
            .push(RegistryEvent::Registered { account, hat, at });
        Ok(VoterRecord {
            hat,
            registered_at: at,
        })
    }

    fn check_registration(
        &self,
        registrant: Registrant<'_>,
        hat: HatId,
    ) -> Result<AccountAddress, RegistryError> {
        let account = match registrant {
            Registrant::Caller(account) => *account,
            Registrant::ThirdParty(account) => {
                if !self.control.third_party_registration() {
                    return Err(RegistryError::NotPermitted);
                }
                *account
            }
        };
        if !self.weights.recognizes(hat) {
            return Err(RegistryError::UnknownCredential(hat));
        }
        if self.voters.is_registered_under(&account, hat) {
            return Err(RegistryError::AlreadyRegistered { account, hat });
        }
        if !self.hats.is_holder(&account, hat) {
            return Err(RegistryError::NotCredentialHolder { account, hat });
        }
        Ok(account)
    }

    // ── Weight resolution ───────────────────────────────────────────────

    /// Weight backed by a record that is still worn, zero otherwise.
    fn live_weight(&self, account: &AccountAddress, record: &VoterRecord) -> VoteWeight {
        if !self.hats.is_holder(account, record.hat) {
            tracing::trace!(account = %account, hat = %record.hat, "registered hat no longer worn");
            return VoteWeight::ZERO;
        }
        self.weights.weight(record.hat)
    }
}

impl<H: HatsOracle, C: Clock> Votes for HatsVotes<H, C> {
    fn get_votes(&self, account: &AccountAddress) -> VoteWeight {
        match self.voters.get(account) {
            Some(record) => self.live_weight(account, record),
            None => VoteWeight::ZERO,
        }
    }

    /// Gates on registration time only. Possession and weight are read as
    /// they are now, not as they were at `timepoint`.
    fn get_past_votes(&self, account: &AccountAddress, timepoint: Timepoint) -> VoteWeight {
        match self.voters.get(account) {
            Some(record) if record.registered_at.is_after(timepoint) => VoteWeight::ZERO,
            Some(record) => self.live_weight(account, record),
            None => VoteWeight::ZERO,
        }
    }

    // Total supply is not tracked, so proportional quorums cannot be supported.
    fn get_past_total_supply(&self, _timepoint: Timepoint) -> VoteWeight {
        VoteWeight::ZERO
    }

    fn delegates(&self, account: &AccountAddress) -> AccountAddress {
        *account
    }

    fn delegate(&mut self, _caller: &AccountAddress, _delegatee: &AccountAddress) {}

    fn delegate_by_sig(
        &mut self,
        _delegatee: &AccountAddress,
        _nonce: u64,
        _expiry: Timepoint,
        _signature: &DelegationSignature,
    ) {
    }

    fn num_checkpoints(&self, _account: &AccountAddress) -> u32 {
        0
    }

    fn clock(&self) -> Timepoint {
        self.clock.now()
    }

    fn clock_mode(&self) -> &'static str {
        self.clock.mode().descriptor()
    }
}
