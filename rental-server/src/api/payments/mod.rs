//! Payment API
//!
//! Deposit due on the payment page against the caller's credits.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/deposit-check", post(handler::deposit_check))
}
