use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Deserializer;
use tracing::debug;

use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::errors::ApiError;

/// An employee decoded from the request body.
///
/// The content type is not inspected. Only the first JSON value of the body
/// is decoded; anything after it is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeBody(pub Employee);

impl<S> FromRequest<S> for EmployeeBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                debug!(%rejection, "failed to read employee payload");
                return Err(ApiError::InvalidPayload);
            }
        };
        decode(&bytes).map(EmployeeBody)
    }
}

fn decode(bytes: &[u8]) -> Result<Employee, ApiError> {
    let mut values = Deserializer::from_slice(bytes).into_iter::<Employee>();
    match values.next() {
        Some(Ok(employee)) => Ok(employee),
        Some(Err(err)) => {
            debug!(%err, "rejected employee payload");
            Err(ApiError::InvalidPayload)
        }
        None => {
            debug!("empty employee payload");
            Err(ApiError::InvalidPayload)
        }
    }
}
