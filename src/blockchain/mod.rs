//! Blockchain account and network detection.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key)
//!     → wallet.rs (account address, signing)
//!
//! DappConfig.blockchain (RPC URLs)
//!     → client.rs (chain id query with timeouts)
//!     → network id for the messaging client
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use types::{BlockchainConfig, BlockchainError, ChainId};
pub use wallet::Wallet;
