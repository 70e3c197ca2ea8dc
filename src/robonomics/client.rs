//! Robonomics messaging client.
//!
//! Holds everything the client is bound to: the account, the ENS settings
//! used to resolve Robonomics names, the IPFS message provider and the
//! lighthouse. The lighthouse name doubles as the pub/sub topic.

use alloy::primitives::Address;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::blockchain::Wallet;
use crate::config::constants::VERSION;
use crate::config::network::{parse_ens_address, NetworkProfile};
use crate::observability::metrics;
use crate::robonomics::ipfs::{IpfsHandle, MessageProviderIpfs};
use crate::robonomics::types::{RobonomicsError, RobonomicsResult};

/// ENS settings for name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnsOptions {
    /// Registry address, empty for the default registry.
    pub address: String,
    pub suffix: String,
    pub version: u32,
}

/// Construction options for [`RobonomicsClient`].
#[derive(Debug, Clone)]
pub struct RobonomicsOptions {
    pub network_id: u64,
    pub account: Address,
    pub ens: EnsOptions,
    pub message_provider: MessageProviderIpfs,
    pub lighthouse: String,
}

impl RobonomicsOptions {
    /// Options for `profile`, signing as `wallet` over `ipfs`.
    pub fn from_profile(wallet: &Wallet, ipfs: Arc<dyn IpfsHandle>, profile: &NetworkProfile) -> Self {
        Self {
            network_id: profile.chain_id,
            account: wallet.address(),
            ens: EnsOptions {
                address: profile.ens.clone(),
                suffix: profile.ens_suffix.clone(),
                version: VERSION,
            },
            message_provider: MessageProviderIpfs::new(ipfs),
            lighthouse: profile.lighthouse.clone(),
        }
    }
}

/// An initialized messaging client.
#[derive(Debug)]
pub struct RobonomicsClient {
    network_id: u64,
    account: Address,
    ens: EnsOptions,
    ens_registry: Option<Address>,
    message_provider: MessageProviderIpfs,
    lighthouse: String,
}

impl RobonomicsClient {
    pub fn new(options: RobonomicsOptions) -> RobonomicsResult<Self> {
        if options.lighthouse.is_empty() {
            return Err(RobonomicsError::InvalidProfile(format!(
                "network {}: empty lighthouse",
                options.network_id
            )));
        }
        let ens_registry = parse_ens_address(options.network_id, &options.ens.address)?;

        Ok(Self {
            network_id: options.network_id,
            account: options.account,
            ens: options.ens,
            ens_registry,
            message_provider: options.message_provider,
            lighthouse: options.lighthouse,
        })
    }

    pub fn network_id(&self) -> u64 {
        self.network_id
    }

    /// Account messages are sent from.
    pub fn account(&self) -> Address {
        self.account
    }

    pub fn ens(&self) -> &EnsOptions {
        &self.ens
    }

    /// Parsed ENS registry, `None` for the library default.
    pub fn ens_registry(&self) -> Option<Address> {
        self.ens_registry
    }

    pub fn lighthouse(&self) -> &str {
        &self.lighthouse
    }

    pub fn message_provider(&self) -> &MessageProviderIpfs {
        &self.message_provider
    }

    /// Publish a JSON message to the lighthouse.
    pub fn publish<T: Serialize>(&self, msg: &T) -> RobonomicsResult<()> {
        self.message_provider.send(&self.lighthouse, msg)?;
        metrics::record_message_published(self.network_id);
        Ok(())
    }

    /// Receive JSON messages broadcast on the lighthouse.
    pub fn subscribe<T, F>(&self, handler: F) -> RobonomicsResult<()>
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) + Send + Sync + 'static,
    {
        self.message_provider.on(&self.lighthouse, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::network::{NetworkProfiles, SIDECHAIN};
    use crate::robonomics::ipfs::LocalIpfs;
    use std::sync::Mutex;

    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn sidechain_options() -> RobonomicsOptions {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let profiles = NetworkProfiles::default();
        RobonomicsOptions::from_profile(&wallet, Arc::new(LocalIpfs::new("QmTest")), profiles.get(SIDECHAIN).unwrap())
    }

    #[test]
    fn test_from_profile() {
        let client = RobonomicsClient::new(sidechain_options()).unwrap();
        assert_eq!(client.network_id(), SIDECHAIN);
        assert_eq!(client.ens().suffix, "sid");
        assert_eq!(client.ens().version, VERSION);
        assert!(client.ens_registry().is_some());
        assert_eq!(client.lighthouse(), "airalab.lighthouse.5.robonomics.sid");
        assert_eq!(
            client.account().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_rejects_bad_ens() {
        let mut options = sidechain_options();
        options.ens.address = "0xabc".to_string();
        let err = RobonomicsClient::new(options).unwrap_err();
        assert!(matches!(err, RobonomicsError::InvalidProfile(_)));
    }

    #[test]
    fn test_rejects_empty_lighthouse() {
        let mut options = sidechain_options();
        options.lighthouse = String::new();
        let err = RobonomicsClient::new(options).unwrap_err();
        assert!(matches!(err, RobonomicsError::InvalidProfile(_)));
        assert!(err.to_string().contains("empty lighthouse"));
    }

    #[test]
    fn test_publish_reaches_lighthouse_subscribers() {
        let client = RobonomicsClient::new(sidechain_options()).unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        client
            .subscribe(move |msg: serde_json::Value| sink.lock().unwrap().push(msg))
            .unwrap();
        client
            .publish(&serde_json::json!({ "objective": "QmPtwRTjPmvBweSmG4zVGtUc9KWxLsPp76xERvjUXFJWEz" }))
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0]["objective"], "QmPtwRTjPmvBweSmG4zVGtUc9KWxLsPp76xERvjUXFJWEz");
    }
}
