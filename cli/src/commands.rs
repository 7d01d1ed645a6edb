//! Command execution against a registry persisted to a state file.

use anyhow::Context;
use hatvote_oracle::{Clock, HatsOracle};
use hatvote_registry::{HatsVotes, RegistryError, RegistryEvent, Votes};
use hatvote_types::{AccountAddress, HatId, VoteWeight};
use serde::Serialize;
use std::path::Path;

/// A state-changing registry call.
#[derive(Clone, Debug)]
pub enum Action {
    SetWeights {
        caller: AccountAddress,
        hats: Vec<HatId>,
        weights: Vec<VoteWeight>,
    },
    SetOwnerHat {
        caller: AccountAddress,
        hat: HatId,
    },
    SetThirdParty {
        caller: AccountAddress,
        enabled: bool,
    },
    Lock {
        caller: AccountAddress,
    },
    Register {
        caller: AccountAddress,
        hat: HatId,
        on_behalf_of: Option<AccountAddress>,
    },
}

/// Run `action` and return the events it produced.
pub fn apply<H: HatsOracle, C: Clock>(
    registry: &mut HatsVotes<H, C>,
    action: &Action,
) -> Result<Vec<RegistryEvent>, RegistryError> {
    match action {
        Action::SetWeights {
            caller,
            hats,
            weights,
        } => registry.set_weights(caller, hats, weights)?,
        Action::SetOwnerHat { caller, hat } => registry.set_owner_hat(caller, *hat)?,
        Action::SetThirdParty { caller, enabled } => {
            registry.set_third_party_registration(caller, *enabled)?
        }
        Action::Lock { caller } => registry.lock(caller)?,
        Action::Register {
            caller,
            hat,
            on_behalf_of: Some(account),
        } => {
            registry.register_for(caller, account, *hat)?;
        }
        Action::Register {
            caller,
            hat,
            on_behalf_of: None,
        } => {
            registry.register(caller, *hat)?;
        }
    }
    Ok(registry.drain_events())
}

pub fn load_state<H: HatsOracle, C: Clock>(
    path: &Path,
    hats: H,
    clock: C,
) -> anyhow::Result<HatsVotes<H, C>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read state file {}", path.display()))?;
    HatsVotes::load_state(&bytes, hats, clock)
        .with_context(|| format!("failed to decode state file {}", path.display()))
}

pub fn save_state<H: HatsOracle, C: Clock>(
    registry: &HatsVotes<H, C>,
    path: &Path,
) -> anyhow::Result<()> {
    let bytes = registry.save_state()?;
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write state file {}", path.display()))
}

/// Everything `show` prints.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub owner_hat: HatId,
    pub third_party_registration: bool,
    pub locked: bool,
    pub clock: u64,
    pub clock_mode: &'static str,
    pub weights: Vec<(HatId, VoteWeight)>,
    pub voters: Vec<VoterSummary>,
}

#[derive(Debug, Serialize)]
pub struct VoterSummary {
    pub account: AccountAddress,
    pub hat: HatId,
    pub registered_at: u64,
    pub votes: VoteWeight,
}

pub fn summarize<H: HatsOracle, C: Clock>(registry: &HatsVotes<H, C>) -> Summary {
    Summary {
        owner_hat: registry.owner_hat(),
        third_party_registration: registry.third_party_registration(),
        locked: registry.is_locked(),
        clock: registry.clock().raw(),
        clock_mode: registry.clock_mode(),
        weights: registry.weights().iter().collect(),
        voters: registry
            .voters()
            .iter()
            .map(|(account, record)| VoterSummary {
                account: *account,
                hat: record.hat,
                registered_at: record.registered_at.raw(),
                votes: registry.get_votes(account),
            })
            .collect(),
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "owner hat:                {}", self.owner_hat)?;
        writeln!(f, "third-party registration: {}", self.third_party_registration)?;
        writeln!(f, "locked:                   {}", self.locked)?;
        writeln!(f, "clock:                    {} ({})", self.clock, self.clock_mode)?;
        writeln!(f, "weights:")?;
        for (hat, weight) in &self.weights {
            writeln!(f, "  {hat}: {weight}")?;
        }
        writeln!(f, "voters:")?;
        for v in &self.voters {
            writeln!(
                f,
                "  {} {} since {} -> {}",
                v.account, v.hat, v.registered_at, v.votes
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::holders::HolderTable;
    use hatvote_registry::RegistryConfig;
    use hatvote_types::ClockMode;

    fn holders(owner: &AccountAddress, alice: &AccountAddress) -> HolderTable {
        HolderTable::from_toml_str(&format!(
            r#"
            [[holders]]
            account = "{owner}"
            hats = [1]

            [[holders]]
            account = "{alice}"
            hats = [7]
            "#
        ))
        .unwrap()
    }

    #[test]
    fn actions_persist_across_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("hatvote.state");
        let owner = AccountAddress::repeat_byte(0xaa);
        let alice = AccountAddress::repeat_byte(0x01);
        let config = RegistryConfig {
            owner_hat: HatId::new(1),
            ..Default::default()
        };

        let registry = HatsVotes::from_config(
            &config,
            holders(&owner, &alice),
            FixedClock::new(10, ClockMode::BlockNumber),
        )
        .unwrap();
        save_state(&registry, &state).unwrap();

        // Second invocation: configure weights.
        let mut registry = load_state(
            &state,
            holders(&owner, &alice),
            FixedClock::new(11, ClockMode::BlockNumber),
        )
        .unwrap();
        let events = apply(
            &mut registry,
            &Action::SetWeights {
                caller: owner,
                hats: vec![HatId::new(7)],
                weights: vec![VoteWeight::new(100)],
            },
        )
        .unwrap();
        assert_eq!(events.len(), 1);
        save_state(&registry, &state).unwrap();

        // Third invocation: alice registers at block 12.
        let mut registry = load_state(
            &state,
            holders(&owner, &alice),
            FixedClock::new(12, ClockMode::BlockNumber),
        )
        .unwrap();
        apply(
            &mut registry,
            &Action::Register {
                caller: alice,
                hat: HatId::new(7),
                on_behalf_of: None,
            },
        )
        .unwrap();
        save_state(&registry, &state).unwrap();

        let registry = load_state(
            &state,
            holders(&owner, &alice),
            FixedClock::new(13, ClockMode::BlockNumber),
        )
        .unwrap();
        let summary = summarize(&registry);
        assert_eq!(summary.voters.len(), 1);
        assert_eq!(summary.voters[0].registered_at, 12);
        assert_eq!(summary.voters[0].votes, VoteWeight::new(100));
    }

    #[test]
    fn rejected_action_surfaces_registry_error() {
        let owner = AccountAddress::repeat_byte(0xaa);
        let alice = AccountAddress::repeat_byte(0x01);
        let mut registry = HatsVotes::new(
            holders(&owner, &alice),
            FixedClock::new(0, ClockMode::BlockNumber),
            HatId::new(1),
            false,
        );
        let err = apply(&mut registry, &Action::Lock { caller: alice }).unwrap_err();
        assert!(matches!(err, RegistryError::NotOwner { .. }));
    }

    #[test]
    fn state_file_keeps_its_clock_mode() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("hatvote.state");
        let config = RegistryConfig {
            clock_mode: ClockMode::Timestamp,
            ..Default::default()
        };
        let registry = HatsVotes::from_config(
            &config,
            HolderTable::default(),
            FixedClock::new(1_700_000_000, ClockMode::Timestamp),
        )
        .unwrap();
        save_state(&registry, &state).unwrap();

        let err = load_state(
            &state,
            HolderTable::default(),
            FixedClock::new(20_000_000, ClockMode::BlockNumber),
        )
        .err()
        .unwrap();
        assert!(matches!(
            err.downcast_ref::<RegistryError>(),
            Some(RegistryError::Config(_))
        ));

        let reloaded = load_state(
            &state,
            HolderTable::default(),
            FixedClock::new(1_700_000_100, ClockMode::Timestamp),
        );
        assert!(reloaded.is_ok());
    }

    #[test]
    fn missing_state_file_is_an_error() {
        let result = load_state(
            Path::new("/nonexistent/hatvote.state"),
            HolderTable::default(),
            FixedClock::new(0, ClockMode::BlockNumber),
        );
        assert!(result.is_err());
    }
}
