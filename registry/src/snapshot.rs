//! Binary persistence of the registry's owned state.
//!
//! Only the weight table, the voter registry, the control state and the
//! clock mode the timestamps were taken in are saved. Hat holdings live in
//! the oracle and are never persisted here.

use crate::control::ControlState;
use crate::error::RegistryError;
use crate::registry::{ensure_clock_mode, HatsVotes};
use crate::voters::VoterRegistry;
use crate::weights::WeightTable;
use hatvote_oracle::{Clock, HatsOracle};
use hatvote_types::ClockMode;
use serde::{Deserialize, Serialize};

/// Serializable snapshot of a registry's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub weights: WeightTable,
    pub voters: VoterRegistry,
    pub control: ControlState,
    /// Unit of every `registered_at` in `voters`.
    pub clock_mode: ClockMode,
}

impl RegistrySnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>, RegistryError> {
        bincode::serialize(self).map_err(|e| RegistryError::Serialization(e.to_string()))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, RegistryError> {
        bincode::deserialize(data).map_err(|e| RegistryError::Serialization(e.to_string()))
    }
}

impl<H: HatsOracle, C: Clock> HatsVotes<H, C> {
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            weights: self.weights.clone(),
            voters: self.voters.clone(),
            control: self.control.clone(),
            clock_mode: self.clock.mode(),
        }
    }

    /// Serialize the registry state to bytes.
    pub fn save_state(&self) -> Result<Vec<u8>, RegistryError> {
        self.snapshot().to_bytes()
    }

    /// Restore a registry from [`HatsVotes::save_state`] output, reattaching
    /// it to an oracle and a clock. Pending events are not part of the state.
    ///
    /// Fails with [`RegistryError::Config`] if `clock` runs in a different
    /// mode than the one the state was recorded under.
    pub fn load_state(data: &[u8], hats: H, clock: C) -> Result<Self, RegistryError> {
        let snapshot = RegistrySnapshot::from_bytes(data)?;
        Self::from_snapshot(snapshot, hats, clock)
    }

    pub fn from_snapshot(
        snapshot: RegistrySnapshot,
        hats: H,
        clock: C,
    ) -> Result<Self, RegistryError> {
        ensure_clock_mode(snapshot.clock_mode, &clock)?;
        Ok(Self::from_parts(
            hats,
            clock,
            snapshot.weights,
            snapshot.voters,
            snapshot.control,
        ))
    }
}
