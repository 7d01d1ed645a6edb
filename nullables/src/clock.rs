//! Nullable clock — deterministic block height for testing.

use hatvote_oracle::Clock;
use hatvote_types::{ClockMode, Timepoint};
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
    mode: ClockMode,
}

impl NullClock {
    /// A block-number clock starting at `initial`.
    pub fn new(initial: u64) -> Self {
        Self {
            current: Cell::new(initial),
            mode: ClockMode::BlockNumber,
        }
    }

    /// A unix-seconds clock starting at `initial_secs`.
    pub fn timestamp(initial_secs: u64) -> Self {
        Self {
            current: Cell::new(initial_secs),
            mode: ClockMode::Timestamp,
        }
    }

    /// Advance the clock by `units` blocks (or seconds).
    pub fn advance(&self, units: u64) {
        self.current.set(self.current.get() + units);
    }

    /// Set the clock to a specific value.
    pub fn set(&self, value: u64) {
        self.current.set(value);
    }
}

impl Clock for NullClock {
    fn now(&self) -> Timepoint {
        Timepoint::new(self.current.get())
    }

    fn mode(&self) -> ClockMode {
        self.mode
    }
}
