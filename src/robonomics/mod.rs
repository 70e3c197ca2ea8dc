//! Robonomics messaging subsystem.
//!
//! # Data Flow
//! ```text
//! Wallet (account) + IpfsHandle (transport) + network id
//!     → context.rs (profile lookup by chain id)
//!     → client.rs (RobonomicsClient bound to ENS + lighthouse)
//!     → stored as ClientState::Ready in the context
//!
//! Components:
//!     context.get_instance() → client.publish / client.subscribe
//!     → ipfs.rs (JSON over pub/sub, lighthouse name as topic)
//! ```
//!
//! # Design Decisions
//! - No ambient globals: account and transport are explicit inputs
//! - Unknown network ids fail with a typed error instead of a bad client
//! - State swaps atomically; re-initialization is last-writer-wins

pub mod client;
pub mod context;
pub mod ipfs;
pub mod types;

pub use client::{EnsOptions, RobonomicsClient, RobonomicsOptions};
pub use context::{default_context, get_robonomics, init_robonomics, ClientState, RobonomicsContext};
pub use ipfs::{IpfsHandle, LocalIpfs, MessageProviderIpfs};
pub use types::{RobonomicsError, RobonomicsResult};
