use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::employees::adapters::inbound::employee_body::EmployeeBody;
use crate::modules::employees::adapters::inbound::path_id::EmployeeId;
use crate::modules::employees::core::errors::ApiError;
use crate::shell::state::AppState;

/// Replaces the first employee stored under the path id. The body's own id is
/// stored as-is, even when it differs from the path.
pub async fn handle(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
    EmployeeBody(employee): EmployeeBody,
) -> Result<impl IntoResponse, ApiError> {
    state.employees.update(id, employee.clone()).await?;

    Ok(Json(employee))
}
