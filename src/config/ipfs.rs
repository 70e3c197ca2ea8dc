//! IPFS node configuration.
//!
//! The structure mirrors the options object the IPFS node expects, so the
//! serialized field names are fixed (`EXPERIMENTAL`, `Addresses`, `Swarm`,
//! `Bootstrap`). It is handed to the node as-is.

use serde::{Deserialize, Serialize};

/// Root IPFS node options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IpfsConfig {
    /// Repository path.
    pub repo: String,

    /// Circuit relay settings.
    pub relay: RelayConfig,

    /// Experimental feature toggles.
    #[serde(rename = "EXPERIMENTAL")]
    pub experimental: ExperimentalConfig,

    /// Node config (addresses and bootstrap peers).
    pub config: NodeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    pub enabled: bool,
    pub hop: HopConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HopConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExperimentalConfig {
    /// Robonomics messaging needs pub/sub.
    pub pubsub: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeConfig {
    #[serde(rename = "Addresses")]
    pub addresses: AddressesConfig,

    /// Bootstrap peer multiaddresses.
    #[serde(rename = "Bootstrap")]
    pub bootstrap: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AddressesConfig {
    /// Swarm (websocket-star) addresses.
    #[serde(rename = "Swarm")]
    pub swarm: Vec<String>,
}

const SWARM: [&str; 3] = [
    "/dns4/ws-star.discovery.libp2p.io/tcp/443/wss/p2p-websocket-star",
    "/dns4/1.wsstar.aira.life/tcp/443/wss/p2p-websocket-star/",
    "/dns4/2.wsstar.aira.life/tcp/443/wss/p2p-websocket-star/",
];

const BOOTSTRAP: [&str; 8] = [
    "/dns4/ams-1.bootstrap.libp2p.io/tcp/443/wss/ipfs/QmSoLer265NRgSp2LA3dPaeykiS1J6DifTC88f5uVQKNAd",
    "/dns4/lon-1.bootstrap.libp2p.io/tcp/443/wss/ipfs/QmSoLMeWqB7YGVLJN3pNLQpmmEk35v6wYtsMGLzSr5QBU3",
    "/dns4/nyc-1.bootstrap.libp2p.io/tcp/443/wss/ipfs/QmSoLueR4xBeUbY9WZ9xGUUxunbKWcrNFTDAadQJmocnWm",
    "/dns4/nyc-2.bootstrap.libp2p.io/tcp/443/wss/ipfs/QmSoLV4Bbm51jM9C4gDYZQ9Cy3U6aXMJDAbzgu2fzaDs64",
    "/dns4/node0.preload.ipfs.io/tcp/443/wss/ipfs/QmZMxNdpMkewiVZLMRxaNxUeZpDUb34pWjZ1kZvsd16Zic",
    "/dns4/node1.preload.ipfs.io/tcp/443/wss/ipfs/Qmbut9Ywz9YEDrz8ySBSgWyJk41Uvm2QJPhwDJzJyGFsD6",
    "/dns4/1.pubsub.aira.life/tcp/443/wss/ipfs/QmdfQmbmXt6sqjZyowxPUsmvBsgSGQjm4VXrV7WGy62dv8",
    "/dns4/2.pubsub.aira.life/tcp/443/wss/ipfs/QmPTFt7GJ2MfDuVYwJJTULr6EnsQtGVp8ahYn9NSyoxmd9",
];

impl IpfsConfig {
    /// Render as the JSON options object.
    pub fn to_json(&self) -> serde_json::Value {
        // Plain structs of strings and bools always serialize.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Default for IpfsConfig {
    fn default() -> Self {
        Self {
            repo: "ipfs/robonomics".to_string(),
            relay: RelayConfig::default(),
            experimental: ExperimentalConfig::default(),
            config: NodeConfig::default(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hop: HopConfig::default(),
        }
    }
}

impl Default for HopConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for ExperimentalConfig {
    fn default() -> Self {
        Self { pubsub: true }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            addresses: AddressesConfig::default(),
            bootstrap: BOOTSTRAP.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for AddressesConfig {
    fn default() -> Self {
        Self {
            swarm: SWARM.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape() {
        let json = IpfsConfig::default().to_json();

        assert_eq!(json["repo"], "ipfs/robonomics");
        assert_eq!(json["relay"]["enabled"], true);
        assert_eq!(json["relay"]["hop"]["enabled"], true);
        assert_eq!(json["EXPERIMENTAL"]["pubsub"], true);
        assert_eq!(json["config"]["Addresses"]["Swarm"].as_array().unwrap().len(), 3);
        assert_eq!(json["config"]["Bootstrap"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_default_addresses_verbatim() {
        let config = IpfsConfig::default().config;

        assert_eq!(
            config.addresses.swarm,
            vec![
                "/dns4/ws-star.discovery.libp2p.io/tcp/443/wss/p2p-websocket-star",
                "/dns4/1.wsstar.aira.life/tcp/443/wss/p2p-websocket-star/",
                "/dns4/2.wsstar.aira.life/tcp/443/wss/p2p-websocket-star/",
            ]
        );
        assert_eq!(
            config.bootstrap,
            vec![
                "/dns4/ams-1.bootstrap.libp2p.io/tcp/443/wss/ipfs/QmSoLer265NRgSp2LA3dPaeykiS1J6DifTC88f5uVQKNAd",
                "/dns4/lon-1.bootstrap.libp2p.io/tcp/443/wss/ipfs/QmSoLMeWqB7YGVLJN3pNLQpmmEk35v6wYtsMGLzSr5QBU3",
                "/dns4/nyc-1.bootstrap.libp2p.io/tcp/443/wss/ipfs/QmSoLueR4xBeUbY9WZ9xGUUxunbKWcrNFTDAadQJmocnWm",
                "/dns4/nyc-2.bootstrap.libp2p.io/tcp/443/wss/ipfs/QmSoLV4Bbm51jM9C4gDYZQ9Cy3U6aXMJDAbzgu2fzaDs64",
                "/dns4/node0.preload.ipfs.io/tcp/443/wss/ipfs/QmZMxNdpMkewiVZLMRxaNxUeZpDUb34pWjZ1kZvsd16Zic",
                "/dns4/node1.preload.ipfs.io/tcp/443/wss/ipfs/Qmbut9Ywz9YEDrz8ySBSgWyJk41Uvm2QJPhwDJzJyGFsD6",
                "/dns4/1.pubsub.aira.life/tcp/443/wss/ipfs/QmdfQmbmXt6sqjZyowxPUsmvBsgSGQjm4VXrV7WGy62dv8",
                "/dns4/2.pubsub.aira.life/tcp/443/wss/ipfs/QmPTFt7GJ2MfDuVYwJJTULr6EnsQtGVp8ahYn9NSyoxmd9",
            ]
        );
    }

    #[test]
    fn test_bootstrap_order() {
        let config = IpfsConfig::default();
        assert!(config.config.bootstrap[0].contains("ams-1.bootstrap"));
        assert!(config.config.bootstrap[7].contains("2.pubsub.aira.life"));
        assert!(!config.config.bootstrap.iter().any(|a| a.contains("sfo-3")));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: IpfsConfig = serde_json::from_str(r#"{"EXPERIMENTAL": {"pubsub": false}}"#).unwrap();
        assert!(!config.experimental.pubsub);
        assert_eq!(config.repo, "ipfs/robonomics");
        assert_eq!(config.config.addresses.swarm.len(), 3);
    }
}
