//! JSON body extractor with enveloped errors
//!
//! `axum::Json` rejects bad bodies with a plain-text response; [`AppJson`]
//! reports them through [`AppError`] so every failure uses the same
//! `{ code, message, details }` shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use shared::{AppError, ErrorCode};

/// `Json<T>` whose rejection is an [`AppError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    let code = match &rejection {
        JsonRejection::JsonDataError(_) => ErrorCode::ValidationFailed,
        JsonRejection::JsonSyntaxError(_) => ErrorCode::InvalidFormat,
        _ => ErrorCode::InvalidRequest,
    };
    AppError::with_message(code, rejection.body_text())
}
