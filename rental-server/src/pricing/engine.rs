//! Price breakdown pipeline
//!
//! Runs the calculator steps in order for one quote snapshot. No state is
//! kept between calls: the booking summary, the reservation edit and the
//! payment page all get the same answer for the same inputs.

use shared::models::{PriceBreakdown, QuoteRequest};

use super::calculator::{
    compute_base_price, compute_deposit, compute_discount, compute_final_price,
    compute_rental_days, compute_service_cost, compute_subtotal,
};

/// Compute the full breakdown for a quote
///
/// Inputs are expected to have passed [`super::validate_quote`]; invalid
/// inputs still produce a breakdown (reversed dates count as one day).
pub fn compute_price_breakdown(quote: &QuoteRequest) -> PriceBreakdown {
    let rental_days = compute_rental_days(quote.period.start_date, quote.period.return_date);
    let base_price = compute_base_price(quote.car.daily_rate, rental_days);
    let service_price =
        compute_service_cost(&quote.selected_service_ids, &quote.services, rental_days);
    let discount_amount = compute_discount(base_price, service_price, quote.tier);
    let final_price = compute_final_price(base_price, service_price, discount_amount);
    let deposit_amount = compute_deposit(final_price);

    let breakdown = PriceBreakdown {
        rental_days,
        base_price,
        service_price,
        subtotal: compute_subtotal(base_price, service_price),
        discount_percentage: quote.tier.discount_percentage(),
        discount_amount,
        final_price,
        deposit_amount,
    };

    tracing::debug!(
        car_id = %quote.car.id,
        rental_days,
        final_price,
        deposit_amount,
        "Computed price breakdown"
    );

    breakdown
}
