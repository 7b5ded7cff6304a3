use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::AppError;

/// HTTP header carrying the request's user context.
///
/// Authentication itself lives outside this service; requests arrive with
/// the caller's id already resolved into this header.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the requesting user's id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserId(pub Uuid);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(UserId)
            .ok_or_else(|| {
                AppError::InvalidInput(format!("missing or malformed {} header", USER_ID_HEADER))
            })
    }
}
