//! Environment-driven client configuration.

use std::time::Duration;

use bingo_core::POLL_INTERVAL;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the remote bingo service.
    pub server_url: String,
    /// Game-state polling period.
    pub poll_interval: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let server_url = std::env::var("BINGO_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let poll_interval = std::env::var("BINGO_POLL_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(POLL_INTERVAL);

        Self {
            server_url,
            poll_interval,
        }
    }
}
