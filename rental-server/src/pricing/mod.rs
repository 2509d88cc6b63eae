//! Pricing Engine Module
//!
//! Pure, stateless recomputation of rental prices and deposits. Shared by the
//! booking summary, reservation edit and payment endpoints so display values
//! and submitted values never drift apart.

mod calculator;
mod engine;
pub mod money;

pub use calculator::*;
pub use engine::*;
pub use money::{validate_quote, MONEY_TOLERANCE};
