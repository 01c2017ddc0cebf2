use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::modules::employees::core::errors::ApiError;

/// The `{id}` path segment of `/employees/{id}`, parsed as an integer.
///
/// Rejects with [`ApiError::InvalidId`] before any body is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeId(pub i64);

impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;
        raw.parse::<i64>()
            .map(EmployeeId)
            .map_err(|_| ApiError::InvalidId)
    }
}
