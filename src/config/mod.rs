//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! constants.rs / models.rs / network.rs / ipfs.rs (built-in values)
//!     → schema.rs (DappConfig defaults)
//!
//! optional dapp.toml
//!     → loader.rs (parse & deserialize over defaults)
//!     → validation.rs (semantic checks)
//!     → DappConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Built-in values are compiled in; a file only overrides them
//! - Network profiles are looked up by chain id; an unknown id is an error
//! - The IPFS options keep the field names the node expects

pub mod constants;
pub mod ipfs;
pub mod loader;
pub mod models;
pub mod network;
pub mod schema;
pub mod validation;

pub use constants::{
    MODEL_TRADE, OBJECTIVE_TRADE, OFFERS_API, PRICE, TOKEN, TOKEN_DECIMALS, TOKEN_SYMBOL, VERSION,
};
pub use ipfs::IpfsConfig;
pub use models::{ModelDescriptor, Objective, ACTION, RUN};
pub use network::{builtin_profiles, NetworkProfile, NetworkProfiles};
pub use schema::DappConfig;
