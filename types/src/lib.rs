//! Fundamental types for the hatvote registry.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! account addresses, hat identifiers, vote weights and logical-clock timepoints.

pub mod address;
pub mod error;
pub mod hat;
pub mod time;
pub mod weight;
mod wide;

pub use address::AccountAddress;
pub use error::TypesError;
pub use hat::HatId;
pub use time::{ClockMode, Timepoint};
pub use weight::VoteWeight;
