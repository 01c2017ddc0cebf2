use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::errors::ApiError;
use crate::shared::infrastructure::employee_store::in_memory::InMemoryEmployeeStore;
use crate::shared::infrastructure::employee_store::{EmployeeStore, EmployeeStoreError};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::employees::EmployeeBuilder;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn employee(id: i64, name: &str, position: &str, salary: f64) -> Employee {
    EmployeeBuilder::new()
        .id(id)
        .name(name)
        .position(position)
        .salary(salary)
        .build()
}

#[tokio::test]
async fn store_create_update_delete_scenario() {
    let store = InMemoryEmployeeStore::new();

    store.create(employee(1, "A", "Dev", 1000.0)).await;
    store.create(employee(2, "B", "Mgr", 2000.0)).await;
    let updated = employee(1, "A2", "Dev", 1500.0);
    store.update(1, updated).await.unwrap();

    assert_eq!(
        store.get_by_id(1).await,
        Ok(employee(1, "A2", "Dev", 1500.0))
    );

    store.delete(2).await.unwrap();

    assert_eq!(
        store.get_by_id(2).await,
        Err(EmployeeStoreError::NotFound(2))
    );
    assert_eq!(
        store.list(1, 10).await,
        vec![employee(1, "A2", "Dev", 1500.0)]
    );
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}

fn json_request(method: &str, uri: &str, employee: &Employee) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(employee).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn http_create_update_delete_scenario() {
    let app = router(AppState::new(Arc::new(InMemoryEmployeeStore::new())));

    let (status, _) = send(
        &app,
        json_request("POST", "/employees", &employee(1, "A", "Dev", 1000.0)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(
        &app,
        json_request("POST", "/employees", &employee(2, "B", "Mgr", 2000.0)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        json_request("PUT", "/employees/1", &employee(1, "A2", "Dev", 1500.0)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, empty_request("GET", "/employees/1")).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Employee = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched, employee(1, "A2", "Dev", 1500.0));

    let (status, body) = send(&app, empty_request("DELETE", "/employees/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, body) = send(&app, empty_request("GET", "/employees/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, ApiError::NotFound.to_string().as_bytes());

    let (status, body) = send(&app, empty_request("GET", "/employees")).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<Employee> = serde_json::from_slice(&body).unwrap();
    assert_eq!(listed, vec![employee(1, "A2", "Dev", 1500.0)]);
}

#[tokio::test]
async fn http_router_rejects_unknown_routes_and_methods() {
    let app = router(AppState::new(Arc::new(InMemoryEmployeeStore::new())));

    let (status, _) = send(&app, empty_request("GET", "/managers")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty_request("PATCH", "/employees/1")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, empty_request("DELETE", "/employees")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
