use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::employees::adapters::inbound::employee_body::EmployeeBody;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    EmployeeBody(employee): EmployeeBody,
) -> impl IntoResponse {
    state.employees.create(employee.clone()).await;

    (StatusCode::CREATED, Json(employee))
}
