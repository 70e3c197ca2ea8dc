//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the selected network has a profile
//! - Validate ENS addresses, multiaddrs and RPC URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DappConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::DappConfig;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("network {0} has no profile")]
    UnknownNetwork(u64),

    #[error("network {0} is defined more than once")]
    DuplicateNetwork(u64),

    #[error("network {chain_id}: invalid ENS address '{ens}'")]
    InvalidEnsAddress { chain_id: u64, ens: String },

    #[error("network {0}: lighthouse name is empty")]
    EmptyLighthouse(u64),

    #[error("ipfs repo path is empty")]
    EmptyRepo,

    #[error("invalid multiaddr '{0}'")]
    InvalidMultiaddr(String),

    #[error("invalid RPC URL '{0}'")]
    InvalidRpcUrl(String),

    #[error("rpc_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// True for a CIDv0 string: `Qm` followed by base58, 46 characters total.
pub fn is_cid_v0(cid: &str) -> bool {
    cid.len() == 46 && cid.starts_with("Qm") && cid.chars().all(|c| BASE58_ALPHABET.contains(c))
}

/// Shallow multiaddr check: a leading `/` and protocol/value segments.
pub fn is_multiaddr(addr: &str) -> bool {
    addr.starts_with('/') && addr.trim_matches('/').split('/').filter(|s| !s.is_empty()).count() >= 2
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &DappConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for profile in &config.networks {
        if !seen.insert(profile.chain_id) {
            errors.push(ValidationError::DuplicateNetwork(profile.chain_id));
        }
    }

    let profiles = config.profiles();
    if !profiles.contains(config.network_id) {
        errors.push(ValidationError::UnknownNetwork(config.network_id));
    }
    for profile in profiles.iter() {
        if profile.ens_address().is_err() {
            errors.push(ValidationError::InvalidEnsAddress {
                chain_id: profile.chain_id,
                ens: profile.ens.clone(),
            });
        }
        if profile.lighthouse.trim().is_empty() {
            errors.push(ValidationError::EmptyLighthouse(profile.chain_id));
        }
    }

    if config.ipfs.repo.trim().is_empty() {
        errors.push(ValidationError::EmptyRepo);
    }
    let addrs = config.ipfs.config.addresses.swarm.iter().chain(config.ipfs.config.bootstrap.iter());
    for addr in addrs {
        if !is_multiaddr(addr) {
            errors.push(ValidationError::InvalidMultiaddr(addr.clone()));
        }
    }

    if config.blockchain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    let urls = std::iter::once(&config.blockchain.rpc_url).chain(config.blockchain.failover_urls.iter());
    for url in urls {
        if url.parse::<url::Url>().is_err() {
            errors.push(ValidationError::InvalidRpcUrl(url.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::network::NetworkProfile;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&DappConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = DappConfig::default();
        config.network_id = 42;
        config.ipfs.repo = String::new();
        config.ipfs.config.bootstrap.push("not-a-multiaddr".to_string());
        config.blockchain.rpc_timeout_secs = 0;
        config.blockchain.rpc_url = "::bad::".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::UnknownNetwork(42)));
        assert!(errors.contains(&ValidationError::EmptyRepo));
        assert!(errors.contains(&ValidationError::InvalidMultiaddr("not-a-multiaddr".to_string())));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::InvalidRpcUrl("::bad::".to_string())));
    }

    #[test]
    fn test_profile_problems() {
        let mut config = DappConfig::default();
        let broken = NetworkProfile {
            chain_id: 77,
            ens: "0x1234".to_string(),
            ens_suffix: String::new(),
            lighthouse: " ".to_string(),
        };
        config.networks = vec![broken.clone(), broken];

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateNetwork(77)));
        assert!(errors.contains(&ValidationError::EmptyLighthouse(77)));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidEnsAddress { chain_id: 77, .. })));
    }

    #[test]
    fn test_cid_v0() {
        assert!(is_cid_v0("QmPVr7k4N2jNiCYjbvQWPcmxzm5jwY3ZHEuJMgbQLmPKvY"));
        assert!(!is_cid_v0(""));
        assert!(!is_cid_v0("QmPVr7k4N2jNiCYjbvQWPcmxzm5jwY3ZHEuJMgbQLmPKv0"));
        assert!(!is_cid_v0("bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi"));
    }

    #[test]
    fn test_multiaddr() {
        assert!(is_multiaddr("/dns4/1.wsstar.aira.life/tcp/443/wss/p2p-websocket-star/"));
        assert!(is_multiaddr("/ip4/127.0.0.1/tcp/4001"));
        assert!(!is_multiaddr("/"));
        assert!(!is_multiaddr("dns4/example.com"));
    }
}
