//! Rental Client - HTTP client for the rental platform API
//!
//! Provides the network calls the quote service needs from the external
//! rental API: the customer's credit balance and a health check.

pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use types::HealthStatus;

// Re-export shared types for convenience
pub use shared::models::CreditBalance;
