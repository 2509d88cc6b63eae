//! Reservation API Handlers

use axum::{Json, extract::State};
use shared::models::{EditQuote, EditQuoteRequest};
use shared::{ApiResponse, AppResult};

use crate::api::AppJson;
use crate::auth::AuthContext;
use crate::core::ServerState;
use crate::pricing::money::validate_amount;
use crate::pricing::validate_quote;
use crate::reservations;

/// POST /api/reservations/edit-quote - recompute after an edit
///
/// Insufficient credits is reported in `creditCheck`, not as an error.
pub async fn edit_quote(
    State(state): State<ServerState>,
    auth: AuthContext,
    AppJson(request): AppJson<EditQuoteRequest>,
) -> AppResult<Json<ApiResponse<EditQuote>>> {
    validate_quote(&request.quote)?;
    validate_amount(request.previous_deposit, "previousDeposit")?;

    let available = state.credits.available_credits(&auth).await?;
    let view = reservations::edit_quote(&request.quote, request.previous_deposit, available);

    tracing::info!(
        car_id = %request.quote.car.id,
        action = ?view.deposit_delta.action,
        amount = view.deposit_delta.amount,
        can_confirm = view.credit_check.can_confirm,
        "Edit quote computed"
    );

    Ok(Json(ApiResponse::success(view)))
}
