//! Owned holder for the messaging client.
//!
//! A context starts `Uninitialized` and becomes `Ready` on the first
//! successful `initialize`. Later calls replace the client; readers holding
//! the previous `Arc` keep using it until they drop it.

use arc_swap::ArcSwap;
use std::sync::{Arc, OnceLock};

use crate::blockchain::Wallet;
use crate::config::network::NetworkProfiles;
use crate::config::schema::DappConfig;
use crate::observability::metrics;
use crate::robonomics::client::{RobonomicsClient, RobonomicsOptions};
use crate::robonomics::ipfs::IpfsHandle;
use crate::robonomics::types::{RobonomicsError, RobonomicsResult};

/// Initialization state of a context.
#[derive(Debug, Clone, Default)]
pub enum ClientState {
    #[default]
    Uninitialized,
    Ready(Arc<RobonomicsClient>),
}

/// Messaging context passed to components that talk to Robonomics.
pub struct RobonomicsContext {
    profiles: NetworkProfiles,
    state: ArcSwap<ClientState>,
}

impl RobonomicsContext {
    pub fn new(profiles: NetworkProfiles) -> Self {
        Self {
            profiles,
            state: ArcSwap::from_pointee(ClientState::Uninitialized),
        }
    }

    /// Context using the profile table of `config`.
    pub fn from_config(config: &DappConfig) -> Self {
        Self::new(config.profiles())
    }

    pub fn profiles(&self) -> &NetworkProfiles {
        &self.profiles
    }

    /// Build a client for `network_id` and store it, replacing any previous one.
    ///
    /// On error the stored state is left untouched.
    pub fn initialize(
        &self,
        wallet: &Wallet,
        ipfs: Arc<dyn IpfsHandle>,
        network_id: u64,
    ) -> RobonomicsResult<Arc<RobonomicsClient>> {
        let profile = self.profiles.get(network_id)?;
        let options = RobonomicsOptions::from_profile(wallet, ipfs, profile);
        let client = Arc::new(RobonomicsClient::new(options)?);

        let previous = self.state.swap(Arc::new(ClientState::Ready(client.clone())));
        if let ClientState::Ready(old) = &*previous {
            tracing::debug!(
                previous_network = old.network_id(),
                network_id,
                "Replacing Robonomics client"
            );
        }

        tracing::info!(
            network_id,
            lighthouse = %client.lighthouse(),
            account = %client.account(),
            "Robonomics client initialized"
        );
        metrics::record_client_initialized(network_id);

        Ok(client)
    }

    /// The stored client, or `NotInitialized`.
    pub fn get_instance(&self) -> RobonomicsResult<Arc<RobonomicsClient>> {
        match &**self.state.load() {
            ClientState::Ready(client) => Ok(client.clone()),
            ClientState::Uninitialized => {
                metrics::record_uninitialized_access();
                Err(RobonomicsError::NotInitialized)
            }
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ClientState {
        (**self.state.load()).clone()
    }

    pub fn is_initialized(&self) -> bool {
        matches!(&**self.state.load(), ClientState::Ready(_))
    }
}

impl Default for RobonomicsContext {
    fn default() -> Self {
        Self::new(NetworkProfiles::default())
    }
}

impl std::fmt::Debug for RobonomicsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RobonomicsContext")
            .field("networks", &self.profiles.len())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

static DEFAULT_CONTEXT: OnceLock<RobonomicsContext> = OnceLock::new();

/// Process-wide context with the built-in profiles.
pub fn default_context() -> &'static RobonomicsContext {
    DEFAULT_CONTEXT.get_or_init(RobonomicsContext::default)
}

/// Initialize the process-wide client.
pub fn init_robonomics(
    wallet: &Wallet,
    ipfs: Arc<dyn IpfsHandle>,
    network_id: u64,
) -> RobonomicsResult<Arc<RobonomicsClient>> {
    default_context().initialize(wallet, ipfs, network_id)
}

/// The process-wide client, or `NotInitialized`.
pub fn get_robonomics() -> RobonomicsResult<Arc<RobonomicsClient>> {
    default_context().get_instance()
}
