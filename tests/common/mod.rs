//! Shared helpers for integration tests.

use std::sync::{Arc, Mutex};

use fuji_weather::blockchain::Wallet;
use fuji_weather::robonomics::ipfs::RawHandler;
use fuji_weather::robonomics::{IpfsHandle, RobonomicsResult};

/// Anvil's first account.
pub const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub fn test_wallet() -> Wallet {
    Wallet::from_private_key(TEST_PRIVATE_KEY).unwrap()
}

/// IPFS handle that records publishes instead of sending them.
#[derive(Default)]
pub struct RecordingIpfs {
    pub published: Mutex<Vec<(String, Vec<u8>)>>,
    pub subscriptions: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingIpfs {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn published_topics(&self) -> Vec<String> {
        self.published.lock().unwrap().iter().map(|(t, _)| t.clone()).collect()
    }
}

impl IpfsHandle for RecordingIpfs {
    fn id(&self) -> String {
        "QmRecording".to_string()
    }

    fn publish(&self, topic: &str, data: &[u8]) -> RobonomicsResult<()> {
        self.published.lock().unwrap().push((topic.to_string(), data.to_vec()));
        Ok(())
    }

    fn subscribe(&self, topic: &str, _handler: RawHandler) -> RobonomicsResult<()> {
        self.subscriptions.lock().unwrap().push(topic.to_string());
        Ok(())
    }
}
