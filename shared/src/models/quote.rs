//! Quote DTOs
//!
//! Inputs and outputs of the pricing engine as exchanged with the UI.

use serde::{Deserialize, Serialize};

use super::car::Car;
use super::credit::CreditCheck;
use super::rental::RentalPeriod;
use super::service::Service;
use super::tier::CustomerTier;

/// Full snapshot of pricing inputs, rebuilt from form state on every change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub car: Car,
    pub period: RentalPeriod,
    /// Service catalog as fetched from the rental API
    #[serde(default)]
    pub services: Vec<Service>,
    /// Ids selected in the form; ids missing from `services` are ignored
    #[serde(default)]
    pub selected_service_ids: Vec<String>,
    #[serde(default)]
    pub tier: CustomerTier,
}

/// Derived price of a rental, every field rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub rental_days: i64,
    pub base_price: f64,
    pub service_price: f64,
    /// `base_price + service_price`
    pub subtotal: f64,
    pub discount_percentage: u32,
    pub discount_amount: f64,
    pub final_price: f64,
    pub deposit_amount: f64,
}

/// What has to happen with the deposit after an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepositAction {
    Charge,
    Refund,
}

/// Difference between the deposit already held and the newly computed one
///
/// `action` is `None` (serialized as `null`) when the difference is within
/// the 0.01 rounding tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositDelta {
    pub action: Option<DepositAction>,
    pub amount: f64,
}

/// Body of `POST /api/quotes/deposit-delta`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositDeltaRequest {
    pub old_deposit: f64,
    pub new_deposit: f64,
}

/// Body of `POST /api/reservations/edit-quote`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditQuoteRequest {
    #[serde(flatten)]
    pub quote: QuoteRequest,
    /// Deposit already held for the pending reservation
    pub previous_deposit: f64,
}

/// Reservation-edit screen result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditQuote {
    pub breakdown: PriceBreakdown,
    pub deposit_delta: DepositDelta,
    pub credit_check: CreditCheck,
}

/// Payment screen result: upfront deposit against the credit balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositCheck {
    pub breakdown: PriceBreakdown,
    pub credit_check: CreditCheck,
}
