//! Hat-gated voting-weight registry.
//!
//! Voting power comes from wearing a hat, an externally issued and revocable
//! credential, instead of from a token balance:
//!
//! - The owner (whoever currently wears the owner hat) assigns a weight to each hat.
//! - An account registers under a hat it wears; the registration is stamped
//!   with the logical clock.
//! - Weight queries re-ask the hats oracle every time. Revoking the hat drops
//!   the account's weight to zero immediately, and a weight change applies
//!   retroactively to every valid registration.
//! - `lock` freezes all configuration for good.
//!
//! There is no delegation and no checkpointing. `get_past_votes` only checks
//! that the registration predates the queried timepoint.

pub mod config;
pub mod control;
pub mod error;
pub mod events;
pub mod hook;
pub mod registry;
pub mod snapshot;
pub mod voters;
pub mod votes;
pub mod weights;

pub use config::{RegistryConfig, WeightEntry};
pub use control::{ConfigPermit, ControlState, LockState};
pub use error::RegistryError;
pub use events::RegistryEvent;
pub use hook::HatIssuanceHook;
pub use registry::HatsVotes;
pub use snapshot::RegistrySnapshot;
pub use voters::{VoterRecord, VoterRegistry};
pub use votes::{DelegationSignature, Votes};
pub use weights::WeightTable;
