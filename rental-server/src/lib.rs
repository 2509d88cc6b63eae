//! Rental Quote Server - pricing and deposit engine for the rental UI
//!
//! One engine serves the three places that price a reservation: the booking
//! summary, the reservation edit and the payment page.
//!
//! - **pricing** (`pricing`): rental days, base/service cost, discount, final price, deposit
//! - **reservations** (`reservations`): deposit delta and credit check views
//! - **credits** (`credits`): credit balance capability (rental API)
//! - **auth** (`auth`): bearer token context
//! - **HTTP API** (`api`): JSON endpoints
//!
//! ```text
//! rental-server/src/
//! ├── core/          # config, state, errors, server
//! ├── auth/          # AuthContext
//! ├── credits/       # CreditsClient
//! ├── pricing/       # engine
//! ├── reservations/  # edit / payment views
//! ├── api/           # routes and handlers
//! └── utils/         # logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod credits;
pub mod pricing;
pub mod reservations;
pub mod utils;

pub use auth::AuthContext;
pub use core::{Config, Server, ServerState};
pub use credits::{CreditsClient, RemoteCredits, StaticCredits};
pub use pricing::compute_price_breakdown;

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// Load `.env`, read configuration and start logging
///
/// Must be called from within the tokio runtime when `LOG_DIR` is set (the
/// log cleanup task is spawned on it).
pub fn setup_environment() -> anyhow::Result<Config> {
    // A missing .env is fine
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.json_logs(), config.log_dir.as_deref())?;

    Ok(config)
}
