//! Reservation-side consumers of the pricing engine
//!
//! ```text
//! QuoteRequest → compute_price_breakdown → deposit / delta → CreditCheck → view
//! ```

pub mod quote;

pub use quote::{deposit_check, edit_quote};
