use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::debug;

use crate::shared::infrastructure::employee_store::EmployeeStoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid employee ID")]
    InvalidId,

    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("Employee not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<EmployeeStoreError> for ApiError {
    fn from(err: EmployeeStoreError) -> Self {
        debug!(%err, "store operation failed");
        match err {
            EmployeeStoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
