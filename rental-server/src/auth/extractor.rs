//! Bearer token extractor
//!
//! Handlers that act on behalf of the customer take an [`AuthContext`]
//! argument; requests without a usable bearer token are rejected with 401.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::AppError;

use super::context::{AuthContext, extract_bearer};

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        match auth_header {
            Some(header) => extract_bearer(header)
                .map(AuthContext::new)
                .ok_or_else(|| AppError::invalid_token("Invalid authorization header")),
            None => {
                tracing::debug!(uri = %parts.uri, "Missing authorization header");
                Err(AppError::not_authenticated())
            }
        }
    }
}
