//! Credits capability
//!
//! Handlers never reach for a global session or client: the credits lookup
//! is a [`CreditsClient`] held by [`crate::core::ServerState`] and called
//! with the caller's [`AuthContext`].
//!
//! - [`RemoteCredits`] - rental API via `rental-client` (production)
//! - [`StaticCredits`] - fixed balance (tests, local development)

use async_trait::async_trait;
use rental_client::{ClientConfig, ClientError, ClientResult, HttpClient};
use shared::{AppError, AppResult};

use crate::auth::AuthContext;
use crate::pricing::money::validate_amount;

/// Source of the customer's available credits
#[async_trait]
pub trait CreditsClient: Send + Sync {
    /// Available credits of the customer identified by `auth`
    async fn available_credits(&self, auth: &AuthContext) -> AppResult<f64>;

    /// Check that the credits source is reachable
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Credits read from the rental API
#[derive(Debug, Clone)]
pub struct RemoteCredits {
    client: HttpClient,
}

impl RemoteCredits {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            client: HttpClient::new(config)?,
        })
    }
}

#[async_trait]
impl CreditsClient for RemoteCredits {
    async fn available_credits(&self, auth: &AuthContext) -> AppResult<f64> {
        let balance = self
            .client
            .clone()
            .with_token(auth.token())
            .credit_balance()
            .await
            .map_err(credits_error)?;

        validate_amount(balance.balance, "balance")
            .map_err(|e| AppError::upstream(format!("Rental API returned {}", e.message)))?;

        Ok(balance.balance)
    }

    async fn ping(&self) -> AppResult<()> {
        let health = self.client.health().await.map_err(credits_error)?;
        if !health.is_ok() {
            return Err(AppError::upstream(format!(
                "Rental API reports status '{}'",
                health.status
            )));
        }
        Ok(())
    }
}

/// Fixed balance, independent of the caller
#[derive(Debug, Clone, Copy)]
pub struct StaticCredits {
    balance: f64,
}

impl StaticCredits {
    pub fn new(balance: f64) -> Self {
        Self { balance }
    }
}

#[async_trait]
impl CreditsClient for StaticCredits {
    async fn available_credits(&self, _auth: &AuthContext) -> AppResult<f64> {
        Ok(self.balance)
    }
}

/// Map a rental API failure to the error reported to our caller
///
/// Auth failures are passed through; an unreachable API is 503, any other
/// bad answer is 502.
pub fn credits_error(err: ClientError) -> AppError {
    tracing::warn!(error = %err, "Credits lookup failed");

    match err {
        ClientError::Unauthorized => AppError::invalid_token("Rental API rejected the token"),
        ClientError::Forbidden(msg) => AppError::permission_denied(msg),
        e if e.is_transport() => AppError::credits_unavailable(e.to_string()),
        e => AppError::upstream(e.to_string()),
    }
}
