//! Rental period

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Inclusive calendar-date range of a rental
///
/// Time of day is not part of the model; pickup and return on the same date
/// is a one-day rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalPeriod {
    pub start_date: NaiveDate,
    pub return_date: NaiveDate,
}

impl RentalPeriod {
    /// Field-level check the form runs before pricing
    pub fn validate(&self) -> AppResult<()> {
        if self.return_date < self.start_date {
            return Err(AppError::with_message(
                ErrorCode::InvalidRentalPeriod,
                format!(
                    "returnDate {} is before startDate {}",
                    self.return_date, self.start_date
                ),
            )
            .with_detail("field", "returnDate"));
        }
        Ok(())
    }
}
