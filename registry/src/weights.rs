//! Hat → vote weight table.

use crate::control::ConfigPermit;
use crate::error::RegistryError;
use hatvote_types::{HatId, VoteWeight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weight assigned to each recognised hat.
///
/// Entries are never removed; retracting a hat means overwriting its weight
/// with zero. Zero is also what an unconfigured hat resolves to, and the two
/// cases are deliberately indistinguishable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    weights: BTreeMap<HatId, VoteWeight>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current weight of `hat`, zero if it was never configured.
    pub fn weight(&self, hat: HatId) -> VoteWeight {
        self.weights.get(&hat).copied().unwrap_or(VoteWeight::ZERO)
    }

    /// Whether `hat` currently confers any voting power.
    pub fn recognizes(&self, hat: HatId) -> bool {
        !self.weight(hat).is_zero()
    }

    /// Overwrite the weight of every `(hats[i], weights[i])` pair.
    ///
    /// Both slices must have the same length; nothing is written otherwise.
    /// When a hat appears more than once, the last pair wins.
    pub fn set_weights(
        &mut self,
        _permit: &ConfigPermit,
        hats: &[HatId],
        weights: &[VoteWeight],
    ) -> Result<(), RegistryError> {
        if hats.len() != weights.len() {
            return Err(RegistryError::LengthMismatch {
                hats: hats.len(),
                weights: weights.len(),
            });
        }
        for (hat, weight) in hats.iter().zip(weights) {
            self.weights.insert(*hat, *weight);
        }
        Ok(())
    }

    /// All configured entries (including zeroed ones), ordered by hat id.
    pub fn iter(&self) -> impl Iterator<Item = (HatId, VoteWeight)> + '_ {
        self.weights.iter().map(|(h, w)| (*h, *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hats(ids: &[u128]) -> Vec<HatId> {
        ids.iter().copied().map(HatId::new).collect()
    }

    fn weights(ws: &[u128]) -> Vec<VoteWeight> {
        ws.iter().copied().map(VoteWeight::new).collect()
    }

    #[test]
    fn unknown_hat_weighs_zero() {
        let table = WeightTable::new();
        assert_eq!(table.weight(HatId::new(5)), VoteWeight::ZERO);
        assert!(!table.recognizes(HatId::new(5)));
    }

    #[test]
    fn set_and_overwrite() {
        let mut table = WeightTable::new();
        let permit = ConfigPermit::issue();
        table
            .set_weights(&permit, &hats(&[1, 2]), &weights(&[10, 20]))
            .unwrap();
        assert_eq!(table.weight(HatId::new(1)), VoteWeight::new(10));
        assert_eq!(table.weight(HatId::new(2)), VoteWeight::new(20));

        table
            .set_weights(&permit, &hats(&[2]), &weights(&[0]))
            .unwrap();
        assert!(!table.recognizes(HatId::new(2)));
        // Retracted, not deleted.
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn length_mismatch_writes_nothing() {
        let mut table = WeightTable::new();
        let permit = ConfigPermit::issue();
        let err = table
            .set_weights(&permit, &hats(&[1, 2, 3]), &weights(&[10, 20]))
            .unwrap_err();
        assert_eq!(err, RegistryError::LengthMismatch { hats: 3, weights: 2 });
        assert!(table.is_empty());
    }

    #[test]
    fn duplicate_hat_last_wins() {
        let mut table = WeightTable::new();
        table
            .set_weights(
                &ConfigPermit::issue(),
                &hats(&[4, 4]),
                &weights(&[1, 9]),
            )
            .unwrap();
        assert_eq!(table.weight(HatId::new(4)), VoteWeight::new(9));
    }

    #[test]
    fn empty_input_is_a_noop() {
        let mut table = WeightTable::new();
        table.set_weights(&ConfigPermit::issue(), &[], &[]).unwrap();
        assert!(table.is_empty());
    }
}
