//! Payment API Handlers

use axum::{Json, extract::State};
use shared::models::{DepositCheck, QuoteRequest};
use shared::{ApiResponse, AppResult};

use crate::api::AppJson;
use crate::auth::AuthContext;
use crate::core::ServerState;
use crate::pricing::validate_quote;
use crate::reservations;

/// POST /api/payments/deposit-check - full deposit against available credits
pub async fn deposit_check(
    State(state): State<ServerState>,
    auth: AuthContext,
    AppJson(request): AppJson<QuoteRequest>,
) -> AppResult<Json<ApiResponse<DepositCheck>>> {
    validate_quote(&request)?;

    let available = state.credits.available_credits(&auth).await?;
    let view = reservations::deposit_check(&request, available);

    tracing::info!(
        car_id = %request.car.id,
        deposit = view.breakdown.deposit_amount,
        can_confirm = view.credit_check.can_confirm,
        "Deposit check computed"
    );

    Ok(Json(ApiResponse::success(view)))
}
