//! Shared types for the rental pricing workspace
//!
//! Domain models consumed by the pricing engine, request/response DTOs of the
//! quote service, and the unified error system used by the server and client.

pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
