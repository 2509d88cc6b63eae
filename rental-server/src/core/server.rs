//! Server Implementation
//!
//! HTTP server startup and shutdown

use crate::api;
use crate::core::{Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    state: ServerState,
}

impl Server {
    /// Create server around an initialized state
    pub fn new(state: ServerState) -> Self {
        Self { state }
    }

    pub async fn run(&self) -> Result<()> {
        let config = self.state.config.clone();
        let app = api::build_app().with_state(self.state.clone());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        tracing::info!(
            %addr,
            environment = %config.environment,
            "Rental quote server starting"
        );

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.into()))?;

        Ok(())
    }
}
