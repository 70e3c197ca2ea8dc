//! Messaging client error definitions.

use thiserror::Error;

/// Errors raised while building or using the Robonomics client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RobonomicsError {
    /// Client accessed before `initialize`.
    #[error("Robonomics not init")]
    NotInitialized,

    /// No profile for the requested chain id.
    #[error("Unknown network: {0}")]
    UnknownNetwork(u64),

    /// Profile present but unusable.
    #[error("Invalid network profile: {0}")]
    InvalidProfile(String),

    /// IPFS transport failure.
    #[error("IPFS error: {0}")]
    Ipfs(String),

    /// Message could not be encoded or decoded.
    #[error("Codec error: {0}")]
    Codec(String),
}

/// Result type for messaging operations.
pub type RobonomicsResult<T> = Result<T, RobonomicsError>;
