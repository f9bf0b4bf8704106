//! Test helpers for the Quant API

use super::{Client, ClientConfig};

/// Client pointed at a mock server, with an empty basepath so mock paths
/// read like the real endpoint paths.
pub fn test_client(url: &str) -> Client {
    Client::new(ClientConfig {
        client_id: "test-client".to_string(),
        project: "test-project".to_string(),
        token: "test-token".to_string(),
        hostname: url.to_string(),
        basepath: String::new(),
    })
    .unwrap()
}

/// Install a subscriber so `tracing::debug!` output shows up under
/// `cargo test -- --nocapture`. Safe to call from multiple tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
