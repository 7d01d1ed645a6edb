//! Clock pinned to the timepoint given on the command line.

use hatvote_oracle::Clock;
use hatvote_types::{ClockMode, Timepoint};

pub struct FixedClock {
    now: Timepoint,
    mode: ClockMode,
}

impl FixedClock {
    pub fn new(now: u64, mode: ClockMode) -> Self {
        Self {
            now: Timepoint::new(now),
            mode,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timepoint {
        self.now
    }

    fn mode(&self) -> ClockMode {
        self.mode
    }
}
