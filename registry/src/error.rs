use hatvote_types::{AccountAddress, HatId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("caller {caller} does not wear the owner hat {owner_hat}")]
    NotOwner {
        caller: AccountAddress,
        owner_hat: HatId,
    },

    #[error("registry configuration is permanently locked")]
    Locked,

    #[error("{0} carries no voting weight")]
    UnknownCredential(HatId),

    #[error("account {account} does not wear {hat}")]
    NotCredentialHolder { account: AccountAddress, hat: HatId },

    #[error("account {account} is already registered under {hat}")]
    AlreadyRegistered { account: AccountAddress, hat: HatId },

    #[error("third-party registration is disabled")]
    NotPermitted,

    #[error("length mismatch: {hats} hat ids but {weights} weights")]
    LengthMismatch { hats: usize, weights: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
