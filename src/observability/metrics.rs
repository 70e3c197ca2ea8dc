//! Metrics collection.
//!
//! # Metrics
//! - `robonomics_client_initializations_total` (counter): by network
//! - `robonomics_uninitialized_access_total` (counter)
//! - `robonomics_messages_published_total` (counter): by network

/// Count a successful client initialization.
pub fn record_client_initialized(network_id: u64) {
    ::metrics::counter!("robonomics_client_initializations_total", "network" => network_id.to_string())
        .increment(1);
}

/// Count an access to the client before initialization.
pub fn record_uninitialized_access() {
    ::metrics::counter!("robonomics_uninitialized_access_total").increment(1);
}

/// Count a message published to a lighthouse.
pub fn record_message_published(network_id: u64) {
    ::metrics::counter!("robonomics_messages_published_total", "network" => network_id.to_string())
        .increment(1);
}
