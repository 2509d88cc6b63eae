//! Edit-reservation and payment views

use shared::models::{CreditCheck, DepositCheck, EditQuote, QuoteRequest};

use crate::pricing::{compute_deposit_delta, compute_price_breakdown};

/// Recompute a pending reservation after an edit
///
/// The new deposit is compared with `previous_deposit`; only a charge needs
/// credits.
pub fn edit_quote(quote: &QuoteRequest, previous_deposit: f64, available_credits: f64) -> EditQuote {
    let breakdown = compute_price_breakdown(quote);
    let deposit_delta = compute_deposit_delta(previous_deposit, breakdown.deposit_amount);
    let credit_check = CreditCheck::for_delta(&deposit_delta, available_credits);

    EditQuote {
        breakdown,
        deposit_delta,
        credit_check,
    }
}

/// Price a reservation on the payment page, where the whole deposit is due
pub fn deposit_check(quote: &QuoteRequest, available_credits: f64) -> DepositCheck {
    let breakdown = compute_price_breakdown(quote);
    let credit_check = CreditCheck::for_charge(breakdown.deposit_amount, available_credits);

    DepositCheck {
        breakdown,
        credit_check,
    }
}
