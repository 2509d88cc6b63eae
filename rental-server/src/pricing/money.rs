//! Input validation for monetary values
//!
//! The `Decimal` conversions live in [`shared::money`] and are re-exported
//! here for the pricing steps.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::QuoteRequest;

pub use shared::money::{MONEY_TOLERANCE, round_money, to_decimal, to_f64};

/// Maximum allowed daily rate / service rate
const MAX_RATE: f64 = 1_000_000.0;

/// Maximum allowed deposit or credit balance
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str, code: ErrorCode) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::with_message(
            code,
            format!("{} must be a finite number, got {}", field_name, value),
        )
        .with_detail("field", field_name));
    }
    Ok(())
}

fn require_rate(value: f64, field_name: &str, code: ErrorCode) -> AppResult<()> {
    require_finite(value, field_name, code)?;
    if value < 0.0 {
        return Err(AppError::with_message(
            code,
            format!("{} must be non-negative, got {}", field_name, value),
        )
        .with_detail("field", field_name));
    }
    if value > MAX_RATE {
        return Err(AppError::with_message(
            code,
            format!(
                "{} exceeds maximum allowed ({}), got {}",
                field_name, MAX_RATE, value
            ),
        )
        .with_detail("field", field_name));
    }
    Ok(())
}

/// Validate a quote before it reaches the engine
///
/// The engine itself never fails; a reversed period or a nonsensical rate is
/// a form-level error reported here.
pub fn validate_quote(quote: &QuoteRequest) -> AppResult<()> {
    quote.period.validate()?;

    require_rate(quote.car.daily_rate, "dailyRate", ErrorCode::InvalidDailyRate)?;

    for service in &quote.services {
        require_rate(service.rate, "rate", ErrorCode::InvalidServiceRate)
            .map_err(|e| e.with_detail("serviceId", service.id.clone()))?;
    }

    Ok(())
}

/// Validate a plain monetary amount (deposits, balances)
///
/// Amounts must be finite, non-negative and at most [`MAX_AMOUNT`].
pub fn validate_amount(value: f64, field_name: &str) -> AppResult<()> {
    require_finite(value, field_name, ErrorCode::ValueOutOfRange)?;
    if !(0.0..=MAX_AMOUNT).contains(&value) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!(
                "{} must be between 0 and {}, got {}",
                field_name, MAX_AMOUNT, value
            ),
        )
        .with_detail("field", field_name));
    }
    Ok(())
}
