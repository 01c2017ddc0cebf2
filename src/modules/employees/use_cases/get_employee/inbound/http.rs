use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::employees::adapters::inbound::path_id::EmployeeId;
use crate::modules::employees::core::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> Result<impl IntoResponse, ApiError> {
    let employee = state.employees.get_by_id(id).await?;
    Ok(Json(employee))
}
