//! Logical clock trait.

use hatvote_types::{ClockMode, Timepoint};
use std::rc::Rc;
use std::sync::Arc;

/// Source of the current ordering unit (block height or unix seconds).
pub trait Clock {
    /// The current timepoint.
    fn now(&self) -> Timepoint;

    /// Which unit [`Clock::now`] reports.
    fn mode(&self) -> ClockMode;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Timepoint {
        (**self).now()
    }

    fn mode(&self) -> ClockMode {
        (**self).mode()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> Timepoint {
        (**self).now()
    }

    fn mode(&self) -> ClockMode {
        (**self).mode()
    }
}

impl<T: Clock + ?Sized> Clock for Rc<T> {
    fn now(&self) -> Timepoint {
        (**self).now()
    }

    fn mode(&self) -> ClockMode {
        (**self).mode()
    }
}
