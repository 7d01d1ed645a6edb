//! Inbound hook invoked by the hats system right after a hat is issued.

use crate::registry::{HatsVotes, Registrant};
use hatvote_oracle::{Clock, HatsOracle};
use hatvote_types::{AccountAddress, HatId};

/// Receiver of "hat newly issued" notifications.
pub trait HatIssuanceHook {
    /// Called after `hat` was granted to `holder`. `payload` is opaque data
    /// forwarded by the issuer. Returns whether the hook did its job.
    fn on_hat_issued(&mut self, hat: HatId, holder: &AccountAddress, payload: &[u8]) -> bool;
}

/// Auto-registers the new holder through the third-party registration path,
/// with exactly the checks a direct `register_for` would run.
impl<H: HatsOracle, C: Clock> HatIssuanceHook for HatsVotes<H, C> {
    fn on_hat_issued(&mut self, hat: HatId, holder: &AccountAddress, payload: &[u8]) -> bool {
        match self.register_as(Registrant::ThirdParty(holder), hat) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(
                    holder = %holder,
                    hat = %hat,
                    payload_len = payload.len(),
                    error = %e,
                    "issuance hook did not register holder"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::votes::Votes;
    use hatvote_nullables::{NullClock, NullHats};
    use hatvote_types::VoteWeight;

    const OWNER_HAT: HatId = HatId::new(1);
    const VOTER_HAT: HatId = HatId::new(7);

    #[test]
    fn hook_registers_when_third_party_enabled() {
        let hats = NullHats::new();
        let clock = NullClock::new(10);
        let owner = AccountAddress::repeat_byte(0xaa);
        let holder = AccountAddress::repeat_byte(0x01);
        hats.grant(&owner, OWNER_HAT);

        let mut registry = HatsVotes::new(&hats, &clock, OWNER_HAT, true);
        registry
            .set_weights(&owner, &[VOTER_HAT], &[VoteWeight::new(4)])
            .unwrap();

        hats.grant(&holder, VOTER_HAT);
        assert!(registry.on_hat_issued(VOTER_HAT, &holder, b"minted"));
        assert_eq!(registry.get_votes(&holder), VoteWeight::new(4));

        // Issued twice: the second call hits the already-registered check.
        assert!(!registry.on_hat_issued(VOTER_HAT, &holder, &[]));
    }

    #[test]
    fn hook_fails_when_third_party_disabled() {
        let hats = NullHats::new();
        let clock = NullClock::new(10);
        let owner = AccountAddress::repeat_byte(0xaa);
        let holder = AccountAddress::repeat_byte(0x01);
        hats.grant(&owner, OWNER_HAT);

        let mut registry = HatsVotes::new(&hats, &clock, OWNER_HAT, false);
        registry
            .set_weights(&owner, &[VOTER_HAT], &[VoteWeight::new(4)])
            .unwrap();
        hats.grant(&holder, VOTER_HAT);

        assert!(!registry.on_hat_issued(VOTER_HAT, &holder, &[]));
        assert!(registry.voter(&holder).is_none());
    }

    #[test]
    fn hook_ignores_unweighted_hats() {
        let hats = NullHats::new();
        let clock = NullClock::new(10);
        let holder = AccountAddress::repeat_byte(0x01);
        hats.grant(&holder, HatId::new(99));

        let mut registry = HatsVotes::new(&hats, &clock, OWNER_HAT, true);
        assert!(!registry.on_hat_issued(HatId::new(99), &holder, &[]));
    }
}
