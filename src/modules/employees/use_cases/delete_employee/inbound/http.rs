use axum::{extract::State, http::StatusCode};

use crate::modules::employees::adapters::inbound::path_id::EmployeeId;
use crate::modules::employees::core::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> Result<StatusCode, ApiError> {
    state.employees.delete(id).await?;
    Ok(StatusCode::OK)
}
