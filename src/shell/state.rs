use crate::shared::infrastructure::employee_store::EmployeeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(employees: Arc<dyn EmployeeStore>) -> Self {
        Self { employees }
    }
}
