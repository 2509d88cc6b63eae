//! API routes
//!
//! - [`health`] - health checks
//! - [`quotes`] - booking summary quote and deposit delta
//! - [`reservations`] - edit-reservation quote (authenticated)
//! - [`payments`] - payment deposit check (authenticated)

pub mod extract;
pub mod health;
pub mod payments;
pub mod quotes;
pub mod reservations;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub use extract::AppJson;

/// Build a router with all routes registered (no middleware)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health API - public
        .merge(health::router())
        // Quote API - public, pure computation
        .merge(quotes::router())
        // Reservation API - bearer token required
        .merge(reservations::router())
        // Payment API - bearer token required
        .merge(payments::router())
}

/// Build the application with middleware
///
/// Used by the HTTP server and by in-process tests (`oneshot`).
pub fn build_app() -> Router<ServerState> {
    build_router().layer(
        ServiceBuilder::new()
            // Trace - request spans (INFO level)
            .layer(TraceLayer::new_for_http())
            // CORS - the UI calls from the browser
            .layer(CorsLayer::permissive()),
    )
}
