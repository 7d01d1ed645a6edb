//! Nullable infrastructure for deterministic testing.
//!
//! The registry's external collaborators (the hats oracle and the logical
//! clock) are abstracted behind traits in `hatvote-oracle`. This crate
//! provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically (grant/revoke hats, advance blocks)
//! - Never touch the filesystem or network
//!
//! Usage: hand an `Rc`/`Arc` of a nullable to the registry and keep a second
//! handle in the test to steer it.

pub mod clock;
pub mod hats;

pub use clock::NullClock;
pub use hats::NullHats;
