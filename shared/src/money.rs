//! Money conversion helpers using rust_decimal for precision
//!
//! Amounts travel as `f64` on the wire. All arithmetic is done on `Decimal`
//! and results are converted back rounded to 2 decimal places.

use rust_decimal::prelude::*;

/// Decimal places kept for monetary values
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for deposit comparisons (0.01), absorbs rounding noise
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
///
/// NaN becomes zero. Values beyond the `Decimal` range (about ±7.9e28,
/// including infinities) saturate to `Decimal::MAX` / `Decimal::MIN`.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    if value.is_nan() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Round a Decimal to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}
