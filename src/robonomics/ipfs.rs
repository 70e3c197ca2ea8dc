//! IPFS transport seam.
//!
//! The IPFS node itself lives outside this crate. `IpfsHandle` is the
//! narrow pub/sub surface the messaging client needs from it, and
//! `MessageProviderIpfs` layers JSON encoding on top.

use std::sync::Arc;

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::robonomics::types::{RobonomicsError, RobonomicsResult};

/// Callback for raw pub/sub payloads.
pub type RawHandler = Box<dyn Fn(&[u8]) + Send + Sync>;

/// An already-constructed IPFS node with pub/sub enabled.
pub trait IpfsHandle: Send + Sync {
    /// Peer id of the node.
    fn id(&self) -> String;

    /// Publish raw bytes on a topic.
    fn publish(&self, topic: &str, data: &[u8]) -> RobonomicsResult<()>;

    /// Register a handler for every message on a topic.
    fn subscribe(&self, topic: &str, handler: RawHandler) -> RobonomicsResult<()>;
}

/// Message provider that carries JSON messages over IPFS pub/sub.
#[derive(Clone)]
pub struct MessageProviderIpfs {
    ipfs: Arc<dyn IpfsHandle>,
}

impl MessageProviderIpfs {
    pub fn new(ipfs: Arc<dyn IpfsHandle>) -> Self {
        Self { ipfs }
    }

    /// The underlying IPFS handle.
    pub fn ipfs(&self) -> &dyn IpfsHandle {
        self.ipfs.as_ref()
    }

    /// Encode `msg` as JSON and publish it on `topic`.
    pub fn send<T: Serialize>(&self, topic: &str, msg: &T) -> RobonomicsResult<()> {
        let data = serde_json::to_vec(msg).map_err(|e| RobonomicsError::Codec(e.to_string()))?;
        self.ipfs.publish(topic, &data)
    }

    /// Subscribe to `topic`, decoding each payload as `T`.
    ///
    /// Payloads that do not decode are logged and dropped.
    pub fn on<T, F>(&self, topic: &str, handler: F) -> RobonomicsResult<()>
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) + Send + Sync + 'static,
    {
        let topic_name = topic.to_string();
        self.ipfs.subscribe(
            topic,
            Box::new(move |data: &[u8]| match serde_json::from_slice::<T>(data) {
                Ok(msg) => handler(msg),
                Err(e) => {
                    tracing::warn!(topic = %topic_name, error = %e, "Dropping undecodable message");
                }
            }),
        )
    }
}

impl std::fmt::Debug for MessageProviderIpfs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageProviderIpfs")
            .field("peer_id", &self.ipfs.id())
            .finish()
    }
}

/// In-process pub/sub node.
///
/// Delivers published messages synchronously to local subscribers only.
/// Used for offline runs and tests. There is no unsubscribe: handlers stay
/// registered for the lifetime of the node.
pub struct LocalIpfs {
    peer_id: String,
    topics: DashMap<String, Vec<Arc<RawHandler>>>,
}

impl LocalIpfs {
    pub fn new(peer_id: impl Into<String>) -> Self {
        Self {
            peer_id: peer_id.into(),
            topics: DashMap::new(),
        }
    }

    /// Number of handlers registered on a topic.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.topics.get(topic).map(|h| h.len()).unwrap_or(0)
    }
}

impl IpfsHandle for LocalIpfs {
    fn id(&self) -> String {
        self.peer_id.clone()
    }

    fn publish(&self, topic: &str, data: &[u8]) -> RobonomicsResult<()> {
        if topic.is_empty() {
            return Err(RobonomicsError::Ipfs("empty topic".to_string()));
        }
        // Release the shard lock before running handlers; they may publish.
        let handlers: Vec<Arc<RawHandler>> = self
            .topics
            .get(topic)
            .map(|h| h.value().clone())
            .unwrap_or_default();

        tracing::trace!(topic, subscribers = handlers.len(), bytes = data.len(), "Local publish");
        for handler in handlers {
            (**handler)(data);
        }
        Ok(())
    }

    fn subscribe(&self, topic: &str, handler: RawHandler) -> RobonomicsResult<()> {
        if topic.is_empty() {
            return Err(RobonomicsError::Ipfs("empty topic".to_string()));
        }
        self.topics
            .entry(topic.to_string())
            .or_default()
            .push(Arc::new(handler));
        Ok(())
    }
}
