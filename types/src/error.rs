//! Error type for parsing the fundamental types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid account address: {0}")]
    InvalidAddress(String),

    #[error("invalid hat id: {0}")]
    InvalidHatId(String),

    #[error("unknown clock mode: {0}")]
    UnknownClockMode(String),
}
