use crate::modules::employees::core::employee::Employee;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmployeeStoreError {
    #[error("employee {0} not found")]
    NotFound(i64),
}

/// Ordered collection of employee records.
///
/// Records keep insertion order and ids are not required to be unique.
/// Operations keyed by id act on the first record carrying that id.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn create(&self, employee: Employee);

    /// Returns the 1-based `page` of at most `page_size` records. Pages past
    /// the end, and non-positive arguments, yield an empty list.
    async fn list(&self, page: usize, page_size: usize) -> Vec<Employee>;

    async fn get_by_id(&self, id: i64) -> Result<Employee, EmployeeStoreError>;

    /// Replaces the whole record, including its id.
    async fn update(&self, id: i64, employee: Employee) -> Result<(), EmployeeStoreError>;

    async fn delete(&self, id: i64) -> Result<(), EmployeeStoreError>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

pub mod in_memory;
