use proptest::prelude::*;

use hatvote_nullables::{NullClock, NullHats};
use hatvote_registry::{HatsVotes, RegistryError, Votes};
use hatvote_types::{AccountAddress, HatId, VoteWeight};

const OWNER_HAT: HatId = HatId::new(1);

/// A configuration call, as generated by the strategies below.
#[derive(Clone, Debug)]
enum ConfigOp {
    SetWeights(Vec<(u8, u16)>),
    SetOwnerHat(u8),
    SetThirdParty(bool),
    Lock,
}

fn config_op() -> impl Strategy<Value = ConfigOp> {
    prop_oneof![
        prop::collection::vec((any::<u8>(), any::<u16>()), 0..4).prop_map(ConfigOp::SetWeights),
        any::<u8>().prop_map(ConfigOp::SetOwnerHat),
        any::<bool>().prop_map(ConfigOp::SetThirdParty),
        Just(ConfigOp::Lock),
    ]
}

fn apply<H, C>(
    registry: &mut HatsVotes<H, C>,
    caller: &AccountAddress,
    op: &ConfigOp,
) -> Result<(), RegistryError>
where
    H: hatvote_oracle::HatsOracle,
    C: hatvote_oracle::Clock,
{
    match op {
        ConfigOp::SetWeights(pairs) => {
            let hats: Vec<HatId> = pairs.iter().map(|(h, _)| HatId::new(u128::from(*h))).collect();
            let weights: Vec<VoteWeight> = pairs
                .iter()
                .map(|(_, w)| VoteWeight::new(u128::from(*w)))
                .collect();
            registry.set_weights(caller, &hats, &weights)
        }
        ConfigOp::SetOwnerHat(hat) => registry.set_owner_hat(caller, HatId::new(u128::from(*hat))),
        ConfigOp::SetThirdParty(enabled) => registry.set_third_party_registration(caller, *enabled),
        ConfigOp::Lock => registry.lock(caller),
    }
}

proptest! {
    /// After a successful lock, any sequence of configuration calls by any
    /// caller fails with `Locked` and changes nothing.
    #[test]
    fn lock_is_irreversible(
        ops in prop::collection::vec(config_op(), 1..20),
        caller_seed in any::<u8>(),
    ) {
        let hats = NullHats::new();
        let clock = NullClock::new(0);
        let owner = AccountAddress::repeat_byte(0xaa);
        hats.grant(&owner, OWNER_HAT);

        let mut registry = HatsVotes::new(&hats, &clock, OWNER_HAT, false);
        registry.lock(&owner).unwrap();
        let frozen = registry.snapshot();

        let caller = AccountAddress::repeat_byte(caller_seed);
        for op in &ops {
            prop_assert_eq!(apply(&mut registry, &caller, op), Err(RegistryError::Locked));
            prop_assert_eq!(apply(&mut registry, &owner, op), Err(RegistryError::Locked));
        }
        prop_assert_eq!(registry.snapshot(), frozen);
    }

    /// Callers without the owner hat are always rejected with `NotOwner`;
    /// the wearer succeeds with the same call while unlocked.
    #[test]
    fn owner_gate(op in config_op(), stranger_seed in 0u8..0xaa) {
        let hats = NullHats::new();
        let clock = NullClock::new(0);
        let owner = AccountAddress::repeat_byte(0xaa);
        let stranger = AccountAddress::repeat_byte(stranger_seed);
        hats.grant(&owner, OWNER_HAT);

        let mut registry = HatsVotes::new(&hats, &clock, OWNER_HAT, false);
        let before = registry.snapshot();
        prop_assert_eq!(
            apply(&mut registry, &stranger, &op),
            Err(RegistryError::NotOwner { caller: stranger, owner_hat: OWNER_HAT })
        );
        prop_assert_eq!(registry.snapshot(), before);
        prop_assert!(apply(&mut registry, &owner, &op).is_ok());
    }

    /// The weight reported for a registered account always equals the
    /// current table entry while the hat is worn, and zero otherwise.
    #[test]
    fn votes_track_weight_and_possession(
        steps in prop::collection::vec((any::<u16>(), any::<bool>()), 1..16),
    ) {
        let hats = NullHats::new();
        let clock = NullClock::new(0);
        let owner = AccountAddress::repeat_byte(0xaa);
        let voter = AccountAddress::repeat_byte(0x01);
        let hat = HatId::new(7);
        hats.grant(&owner, OWNER_HAT);
        hats.grant(&voter, hat);

        let mut registry = HatsVotes::new(&hats, &clock, OWNER_HAT, false);
        registry.set_weights(&owner, &[hat], &[VoteWeight::new(1)]).unwrap();
        registry.register(&voter, hat).unwrap();

        for (weight, worn) in steps {
            let weight = VoteWeight::new(u128::from(weight));
            registry.set_weights(&owner, &[hat], &[weight]).unwrap();
            if worn {
                hats.grant(&voter, hat);
            } else {
                hats.revoke(&voter, hat);
            }
            let expected = if worn { weight } else { VoteWeight::ZERO };
            prop_assert_eq!(registry.get_votes(&voter), expected);
        }
    }
}
