//! In-memory employee directory.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use super::{
    domain::Employee,
    ports::{DirectoryError, DirectoryResult, EmployeeRepository},
};

/// Thread-safe in-memory directory double.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    employees: Vec<Employee>,
    offline: bool,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory seeded with employees.
    #[must_use]
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let repository = Self::default();
        repository.set_employees(employees);
        repository
    }

    /// Replaces the directory contents.
    pub fn set_employees(&self, employees: impl IntoIterator<Item = Employee>) {
        if let Ok(mut state) = self.state.write() {
            state.employees = employees.into_iter().collect();
        }
    }

    /// Makes fetches fail until cleared.
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut state) = self.state.write() {
            state.offline = offline;
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn fetch_all(&self) -> DirectoryResult<Vec<Employee>> {
        let state = self
            .state
            .read()
            .map_err(|err| DirectoryError::transport(std::io::Error::other(err.to_string())))?;
        if state.offline {
            return Err(DirectoryError::transport(std::io::Error::other(
                "directory offline",
            )));
        }
        Ok(state.employees.clone())
    }
}
