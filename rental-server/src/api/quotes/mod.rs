//! Quote API
//!
//! Pure price computation for the booking summary; no authentication.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/quotes", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::quote))
        .route("/deposit-delta", post(handler::deposit_delta))
}
