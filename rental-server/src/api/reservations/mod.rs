//! Reservation API
//!
//! Quote for editing a pending reservation. Requires a bearer token: the
//! credits of the caller decide whether a deposit increase can be confirmed.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/edit-quote", post(handler::edit_quote))
}
