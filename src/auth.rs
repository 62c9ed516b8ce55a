use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
const MAX_USER_ID_LEN: usize = 64;

/// Caller identity taken from the `x-user-id` header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.len() <= MAX_USER_ID_LEN)
            .ok_or(AppError::Unauthorized)?;

        Ok(Self { id: id.to_owned() })
    }
}
