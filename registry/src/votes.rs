//! The voting-weight interface consumed by governance frameworks.
//!
//! Shaped after the usual token-votes contract (`getVotes`, `getPastVotes`,
//! `delegates`, ...) so a hat-based registry can stand in for a token. Only
//! the weight queries and the clock carry meaning here; the delegation and
//! supply methods exist so the surface is complete.

use hatvote_types::{AccountAddress, Timepoint, VoteWeight};
use serde::{Deserialize, Serialize};

/// An ECDSA-style signature authorising delegation. Accepted and ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationSignature {
    pub v: u8,
    pub r: [u8; 32],
    pub s: [u8; 32],
}

pub trait Votes {
    /// Voting power of `account` right now.
    fn get_votes(&self, account: &AccountAddress) -> VoteWeight;

    /// Voting power of `account` as of `timepoint`.
    fn get_past_votes(&self, account: &AccountAddress, timepoint: Timepoint) -> VoteWeight;

    /// Total voting power as of `timepoint`.
    fn get_past_total_supply(&self, timepoint: Timepoint) -> VoteWeight;

    /// Who `account` delegates to.
    fn delegates(&self, account: &AccountAddress) -> AccountAddress;

    fn delegate(&mut self, caller: &AccountAddress, delegatee: &AccountAddress);

    fn delegate_by_sig(
        &mut self,
        delegatee: &AccountAddress,
        nonce: u64,
        expiry: Timepoint,
        signature: &DelegationSignature,
    );

    /// Number of stored voting-power checkpoints for `account`.
    fn num_checkpoints(&self, account: &AccountAddress) -> u32;

    /// Current timepoint of the clock registrations are stamped with.
    fn clock(&self) -> Timepoint;

    /// Machine-readable description of [`Votes::clock`]'s unit.
    fn clock_mode(&self) -> &'static str;
}
