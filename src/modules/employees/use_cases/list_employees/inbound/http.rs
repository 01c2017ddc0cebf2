use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::employees::use_cases::list_employees::pagination::Pagination;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListEmployeesParams {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListEmployeesParams>, QueryRejection>,
) -> impl IntoResponse {
    let pagination = match params {
        Ok(Query(params)) => {
            Pagination::from_raw(params.page.as_deref(), params.page_size.as_deref())
        }
        Err(_) => Pagination::default(),
    };

    let employees = state
        .employees
        .list(pagination.page, pagination.page_size)
        .await;

    Json(employees)
}
