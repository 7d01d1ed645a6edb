//! Credential oracle trait.

use hatvote_types::{AccountAddress, HatId};
use std::rc::Rc;
use std::sync::Arc;

/// Answers whether an account currently wears a hat.
///
/// Implementations may consult external state that changes at any moment.
/// Callers must not memoize the answer.
pub trait HatsOracle {
    /// Whether `account` holds `hat` right now.
    fn is_holder(&self, account: &AccountAddress, hat: HatId) -> bool;
}

impl<T: HatsOracle + ?Sized> HatsOracle for &T {
    fn is_holder(&self, account: &AccountAddress, hat: HatId) -> bool {
        (**self).is_holder(account, hat)
    }
}

impl<T: HatsOracle + ?Sized> HatsOracle for Arc<T> {
    fn is_holder(&self, account: &AccountAddress, hat: HatId) -> bool {
        (**self).is_holder(account, hat)
    }
}

impl<T: HatsOracle + ?Sized> HatsOracle for Rc<T> {
    fn is_holder(&self, account: &AccountAddress, hat: HatId) -> bool {
        (**self).is_holder(account, hat)
    }
}
