//! Configuration schema definitions.
//!
//! Every section has defaults matching the built-in constants, so an empty
//! file (or no file) yields a working configuration.

use serde::{Deserialize, Serialize};

use crate::config::ipfs::IpfsConfig;
use crate::config::network::{NetworkProfile, NetworkProfiles, SIDECHAIN};

/// Root configuration for the dapp.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DappConfig {
    /// Network the messaging client binds to.
    pub network_id: u64,

    /// Profile overrides applied on top of the built-in table.
    pub networks: Vec<NetworkProfile>,

    /// IPFS node options.
    pub ipfs: IpfsConfig,

    /// JSON-RPC settings used for network detection.
    pub blockchain: BlockchainConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl DappConfig {
    /// Effective profile table: built-ins plus overrides.
    pub fn profiles(&self) -> NetworkProfiles {
        NetworkProfiles::with_overrides(&self.networks)
    }
}

impl Default for DappConfig {
    fn default() -> Self {
        Self {
            network_id: SIDECHAIN,
            networks: Vec::new(),
            ipfs: IpfsConfig::default(),
            blockchain: BlockchainConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// JSON-RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BlockchainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs.
    pub failover_urls: Vec<String>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            failover_urls: Vec::new(),
            rpc_timeout_secs: 10,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
