//! Notifications emitted by successful state transitions.

use hatvote_types::{AccountAddress, HatId, Timepoint, VoteWeight};
use serde::{Deserialize, Serialize};

/// A state change observers may want to react to.
///
/// Events are buffered by the registry in emission order and handed out by
/// `HatsVotes::drain_events`. Rejected calls emit nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    WeightsSet {
        hats: Vec<HatId>,
        weights: Vec<VoteWeight>,
    },
    OwnerHatSet(HatId),
    ThirdPartyRegistrationSet(bool),
    Locked,
    Registered {
        account: AccountAddress,
        hat: HatId,
        at: Timepoint,
    },
}

impl RegistryEvent {
    /// Short stable name, used as the log/JSON tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WeightsSet { .. } => "weights_set",
            Self::OwnerHatSet(_) => "owner_hat_set",
            Self::ThirdPartyRegistrationSet(_) => "third_party_registration_set",
            Self::Locked => "locked",
            Self::Registered { .. } => "registered",
        }
    }
}
