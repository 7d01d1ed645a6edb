//! Abstract traits for the registry's external collaborators.
//!
//! The registry never owns credential issuance or the execution clock. Every
//! backend (an on-chain hats contract, a static holder table, the nullables
//! used in tests) implements these traits and the registry depends only on them.

pub mod clock;
pub mod hats;

pub use clock::Clock;
pub use hats::HatsOracle;
