//! Authentication extractor
//!
//! Pulls the bearer token out of the Authorization header.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;

/// Bearer token taken from `Authorization: Bearer <token>`
///
/// Rejects with `401` when the header is absent or not a bearer credential.
/// Whether the token is valid is decided by the handler.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    /// The raw token string
    pub fn token(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    tracing::debug!(error = %e, "Missing bearer credentials");
                    ApiError::MissingAuth
                })?;

        Ok(Self(bearer.token().to_string()))
    }
}
