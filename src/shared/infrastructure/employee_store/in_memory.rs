// In memory implementation of the EmployeeStore port.
//
// Responsibilities
// - Keep employee records in insertion order.
// - Guard the records with a single reader-writer lock: writers are exclusive,
//   readers share access.

use crate::modules::employees::core::employee::Employee;
use crate::shared::infrastructure::employee_store::{EmployeeStore, EmployeeStoreError};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
pub struct InMemoryEmployeeStore {
    employees: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn page_bounds(page: usize, page_size: usize, len: usize) -> Option<(usize, usize)> {
    if page == 0 || page_size == 0 {
        return None;
    }
    let start = (page - 1).checked_mul(page_size)?;
    if start >= len {
        return None;
    }
    let end = start.saturating_add(page_size).min(len);
    Some((start, end))
}

#[async_trait::async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn create(&self, employee: Employee) {
        let mut guard = self.employees.write().await;
        debug!(id = employee.id, "creating employee");
        guard.push(employee);
    }

    async fn list(&self, page: usize, page_size: usize) -> Vec<Employee> {
        let guard = self.employees.read().await;
        match page_bounds(page, page_size, guard.len()) {
            Some((start, end)) => guard[start..end].to_vec(),
            None => Vec::new(),
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<Employee, EmployeeStoreError> {
        self.employees
            .read()
            .await
            .iter()
            .find(|employee| employee.id == id)
            .cloned()
            .ok_or(EmployeeStoreError::NotFound(id))
    }

    async fn update(&self, id: i64, employee: Employee) -> Result<(), EmployeeStoreError> {
        let mut guard = self.employees.write().await;
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(EmployeeStoreError::NotFound(id))?;
        debug!(id, new_id = employee.id, "updating employee");
        *slot = employee;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), EmployeeStoreError> {
        let mut guard = self.employees.write().await;
        let index = guard
            .iter()
            .position(|employee| employee.id == id)
            .ok_or(EmployeeStoreError::NotFound(id))?;
        guard.remove(index);
        debug!(id, "deleted employee");
        Ok(())
    }

    async fn len(&self) -> usize {
        self.employees.read().await.len()
    }
}
