//! Credits Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::quote::{DepositAction, DepositDelta};
use crate::money::{round_money, to_decimal, to_f64};

/// Credit balance of the signed-in customer (`GET /api/credits/balance`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditBalance {
    pub balance: f64,
}

/// Outcome of comparing a required charge against the available credits
///
/// Insufficient credits is not an error: the UI disables confirmation and
/// shows `shortfall`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCheck {
    /// Amount that has to be debited (0 for refunds / no change)
    pub required_amount: f64,
    pub available_credits: f64,
    /// `required_amount - available_credits`, never negative
    pub shortfall: f64,
    pub can_confirm: bool,
}

impl CreditCheck {
    /// Check the charge implied by a deposit delta (edit reservation)
    ///
    /// Refunds and unchanged deposits never require credits.
    pub fn for_delta(delta: &DepositDelta, available_credits: f64) -> Self {
        let required = match delta.action {
            Some(DepositAction::Charge) => delta.amount,
            Some(DepositAction::Refund) | None => 0.0,
        };
        Self::for_charge(required, available_credits)
    }

    /// Check an upfront charge (payment page)
    pub fn for_charge(amount: f64, available_credits: f64) -> Self {
        let required = round_money(to_decimal(amount).max(Decimal::ZERO));
        let available = round_money(to_decimal(available_credits));
        let shortfall = required.saturating_sub(available).max(Decimal::ZERO);

        Self {
            required_amount: to_f64(required),
            available_credits: to_f64(available),
            shortfall: to_f64(shortfall),
            can_confirm: shortfall.is_zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(action: Option<DepositAction>, amount: f64) -> DepositDelta {
        DepositDelta { action, amount }
    }

    #[test]
    fn test_charge_covered() {
        let check = CreditCheck::for_delta(&delta(Some(DepositAction::Charge), 5.0), 20.0);
        assert_eq!(check.required_amount, 5.0);
        assert_eq!(check.shortfall, 0.0);
        assert!(check.can_confirm);
    }

    #[test]
    fn test_charge_exactly_covered() {
        let check = CreditCheck::for_charge(18.0, 18.0);
        assert_eq!(check.shortfall, 0.0);
        assert!(check.can_confirm);
    }

    #[test]
    fn test_charge_with_shortfall() {
        let check = CreditCheck::for_delta(&delta(Some(DepositAction::Charge), 12.5), 10.2);
        assert_eq!(check.required_amount, 12.5);
        assert_eq!(check.available_credits, 10.2);
        assert_eq!(check.shortfall, 2.3);
        assert!(!check.can_confirm);
    }

    #[test]
    fn test_refund_needs_no_credits() {
        let check = CreditCheck::for_delta(&delta(Some(DepositAction::Refund), 40.0), 0.0);
        assert_eq!(check.required_amount, 0.0);
        assert_eq!(check.shortfall, 0.0);
        assert!(check.can_confirm);
    }

    #[test]
    fn test_no_change_needs_no_credits() {
        let check = CreditCheck::for_delta(&delta(None, 0.0), 0.0);
        assert!(check.can_confirm);
    }

    #[test]
    fn test_negative_balance_increases_shortfall() {
        let check = CreditCheck::for_charge(10.0, -5.0);
        assert_eq!(check.shortfall, 15.0);
        assert!(!check.can_confirm);
    }

    #[test]
    fn test_huge_balance_is_not_zeroed() {
        let check = CreditCheck::for_charge(18.0, 1e30);
        assert!(check.available_credits > 7.0e28);
        assert_eq!(check.shortfall, 0.0);
        assert!(check.can_confirm);
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        let check = CreditCheck::for_charge(1e30, -1e30);
        assert!(check.shortfall > 7.0e28);
        assert!(!check.can_confirm);
    }
}
