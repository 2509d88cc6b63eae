use std::sync::Arc;
use std::time::Instant;

use rental_client::ClientResult;

use crate::core::Config;
use crate::credits::{CreditsClient, RemoteCredits};

/// Server state - shared by all handlers
///
/// Cloning is cheap: every field is behind an `Arc` and nothing is mutated
/// after startup.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Configuration (immutable) |
/// | credits | Credits capability |
/// | started_at | Startup instant, for uptime |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub credits: Arc<dyn CreditsClient>,
    pub started_at: Instant,
}

impl ServerState {
    /// Build state from explicit parts (tests inject their own credits)
    pub fn new(config: Config, credits: Arc<dyn CreditsClient>) -> Self {
        Self {
            config: Arc::new(config),
            credits,
            started_at: Instant::now(),
        }
    }

    /// Build production state: credits come from the rental API
    pub fn initialize(config: &Config) -> ClientResult<Self> {
        let credits = RemoteCredits::new(&config.rental_client_config())?;
        tracing::info!(rental_api = %config.rental_api_url, "Credits client configured");

        Ok(Self::new(config.clone(), Arc::new(credits)))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}
