//! Price Calculator
//!
//! Individual pricing steps. Every step rounds its own result to 2 decimal
//! places; later steps consume the rounded values, so deposit deltas match
//! what the UI has already displayed.
//!
//! Arithmetic saturates at the `Decimal` range instead of panicking.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use shared::models::{CustomerTier, DepositAction, DepositDelta, Service};

use super::money::{round_money, to_decimal, to_f64, MONEY_TOLERANCE};

/// Fixed deposit policy: 10% of the final price
const DEPOSIT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Inclusive day count between two calendar dates
///
/// `start == return` is a one-day rental. A reversed range is a caller bug
/// (rejected by form validation); it still yields the 1-day minimum here.
pub fn compute_rental_days(start_date: NaiveDate, return_date: NaiveDate) -> i64 {
    ((return_date - start_date).num_days() + 1).max(1)
}

/// `daily_rate * days`
pub fn compute_base_price(daily_rate: f64, days: i64) -> f64 {
    to_f64(to_decimal(daily_rate).saturating_mul(Decimal::from(days)))
}

/// Sum of the selected services
///
/// Daily services contribute `rate * days`, the others `rate` once. Ids that
/// are not in `services` contribute nothing: catalogs change after a
/// reservation was created and a stale selection must not break the quote.
pub fn compute_service_cost(selected_service_ids: &[String], services: &[Service], days: i64) -> f64 {
    let days = Decimal::from(days);

    let total: Decimal = selected_service_ids
        .iter()
        .filter_map(|id| {
            let service = services.iter().find(|s| &s.id == id);
            if service.is_none() {
                tracing::debug!(service_id = %id, "Ignoring unknown service in selection");
            }
            service
        })
        .map(|service| {
            let rate = to_decimal(service.rate);
            if service.daily { rate.saturating_mul(days) } else { rate }
        })
        .fold(Decimal::ZERO, Decimal::saturating_add);

    to_f64(total)
}

/// `base_price + service_price`, rounded
pub fn compute_subtotal(base_price: f64, service_cost: f64) -> f64 {
    to_f64(to_decimal(base_price).saturating_add(to_decimal(service_cost)))
}

/// Loyalty discount on the subtotal
///
/// Percentage comes from the tier table `[0, 5, 10, 15, 20]`; the tier is
/// already clamped into 0..=4 by [`CustomerTier`].
pub fn compute_discount(base_price: f64, service_cost: f64, tier: CustomerTier) -> f64 {
    let subtotal = to_decimal(compute_subtotal(base_price, service_cost));
    let percentage = Decimal::from(tier.discount_percentage());

    to_f64(subtotal.saturating_mul(percentage) / Decimal::ONE_HUNDRED)
}

/// `base_price + service_cost - discount_amount`, never negative
pub fn compute_final_price(base_price: f64, service_cost: f64, discount_amount: f64) -> f64 {
    let price = to_decimal(base_price)
        .saturating_add(to_decimal(service_cost))
        .saturating_sub(to_decimal(discount_amount));

    to_f64(price.max(Decimal::ZERO))
}

/// Deposit due for a final price
pub fn compute_deposit(final_price: f64) -> f64 {
    to_f64(to_decimal(final_price).saturating_mul(DEPOSIT_RATE))
}

/// Classify the change between the held deposit and the recomputed one
///
/// Differences within ±0.01 (after rounding) are rounding noise and need no
/// action.
pub fn compute_deposit_delta(old_deposit: f64, new_deposit: f64) -> DepositDelta {
    let difference = round_money(to_decimal(new_deposit).saturating_sub(to_decimal(old_deposit)));

    let action = if difference > MONEY_TOLERANCE {
        Some(DepositAction::Charge)
    } else if difference < -MONEY_TOLERANCE {
        Some(DepositAction::Refund)
    } else {
        None
    };

    DepositDelta {
        action,
        amount: to_f64(difference.abs()),
    }
}
