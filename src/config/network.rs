//! Robonomics network profiles keyed by chain id.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::robonomics::types::{RobonomicsError, RobonomicsResult};

/// Ethereum mainnet.
pub const MAINNET: u64 = 1;

/// Airalab Robonomics sidechain.
pub const SIDECHAIN: u64 = 4451;

/// ENS and lighthouse settings for one network.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkProfile {
    /// Chain id this profile applies to.
    pub chain_id: u64,

    /// ENS registry address. Empty selects the library default registry.
    #[serde(default)]
    pub ens: String,

    /// ENS name suffix (e.g. "eth", "sid").
    #[serde(default)]
    pub ens_suffix: String,

    /// Lighthouse ENS name.
    pub lighthouse: String,
}

impl NetworkProfile {
    /// Parse the ENS registry address, `None` when unset.
    pub fn ens_address(&self) -> RobonomicsResult<Option<Address>> {
        parse_ens_address(self.chain_id, &self.ens)
    }
}

/// Parse an ENS registry address; empty means the default registry.
pub(crate) fn parse_ens_address(chain_id: u64, ens: &str) -> RobonomicsResult<Option<Address>> {
    if ens.is_empty() {
        return Ok(None);
    }
    ens.parse::<Address>().map(Some).map_err(|e| {
        RobonomicsError::InvalidProfile(format!(
            "network {}: invalid ENS address '{}': {}",
            chain_id, ens, e
        ))
    })
}

/// The built-in profile table.
pub fn builtin_profiles() -> Vec<NetworkProfile> {
    vec![
        NetworkProfile {
            chain_id: MAINNET,
            ens: String::new(),
            ens_suffix: String::new(),
            lighthouse: "airalab.lighthouse.5.robonomics.eth".to_string(),
        },
        NetworkProfile {
            chain_id: SIDECHAIN,
            ens: "0xaC4Ac4801b50b74aa3222B5Ba282FF54407B3941".to_string(),
            ens_suffix: "sid".to_string(),
            lighthouse: "airalab.lighthouse.5.robonomics.sid".to_string(),
        },
    ]
}

/// Profile table with lookup by chain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfiles {
    profiles: Vec<NetworkProfile>,
}

impl NetworkProfiles {
    /// Build a table from explicit profiles. Later entries win on duplicate ids.
    pub fn new(profiles: Vec<NetworkProfile>) -> Self {
        let mut table = Self { profiles: Vec::with_capacity(profiles.len()) };
        for profile in profiles {
            table.insert(profile);
        }
        table
    }

    /// Built-in profiles with `overrides` applied on top.
    pub fn with_overrides(overrides: &[NetworkProfile]) -> Self {
        let mut table = Self::default();
        for profile in overrides {
            table.insert(profile.clone());
        }
        table
    }

    /// Insert or replace the profile for its chain id.
    pub fn insert(&mut self, profile: NetworkProfile) {
        match self.profiles.iter_mut().find(|p| p.chain_id == profile.chain_id) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    /// Look up a profile, failing with `UnknownNetwork` when absent.
    pub fn get(&self, chain_id: u64) -> RobonomicsResult<&NetworkProfile> {
        self.profiles
            .iter()
            .find(|p| p.chain_id == chain_id)
            .ok_or(RobonomicsError::UnknownNetwork(chain_id))
    }

    pub fn contains(&self, chain_id: u64) -> bool {
        self.profiles.iter().any(|p| p.chain_id == chain_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for NetworkProfiles {
    fn default() -> Self {
        Self::new(builtin_profiles())
    }
}
