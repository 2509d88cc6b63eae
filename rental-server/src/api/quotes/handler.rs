//! Quote API Handlers

use axum::Json;
use shared::models::{DepositDelta, DepositDeltaRequest, PriceBreakdown, QuoteRequest};
use shared::{ApiResponse, AppResult};

use crate::api::AppJson;
use crate::pricing::money::validate_amount;
use crate::pricing::{compute_deposit_delta, compute_price_breakdown, validate_quote};

/// POST /api/quotes - price breakdown for the booking summary
pub async fn quote(
    AppJson(request): AppJson<QuoteRequest>,
) -> AppResult<Json<ApiResponse<PriceBreakdown>>> {
    validate_quote(&request)?;
    Ok(Json(ApiResponse::success(compute_price_breakdown(&request))))
}

/// POST /api/quotes/deposit-delta - classify a deposit change
pub async fn deposit_delta(
    AppJson(request): AppJson<DepositDeltaRequest>,
) -> AppResult<Json<ApiResponse<DepositDelta>>> {
    validate_amount(request.old_deposit, "oldDeposit")?;
    validate_amount(request.new_deposit, "newDeposit")?;

    let delta = compute_deposit_delta(request.old_deposit, request.new_deposit);
    Ok(Json(ApiResponse::success(delta)))
}
