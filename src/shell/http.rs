use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::employees::use_cases::create_employee::inbound::http as create_http;
use crate::modules::employees::use_cases::delete_employee::inbound::http as delete_http;
use crate::modules::employees::use_cases::get_employee::inbound::http as get_http;
use crate::modules::employees::use_cases::list_employees::inbound::http as list_http;
use crate::modules::employees::use_cases::update_employee::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/employees/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
