//! Repository port for the employee directory.

use super::domain::Employee;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Read-only employee directory contract.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetches the full employee directory.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when the directory cannot be
    /// reached.
    async fn fetch_all(&self) -> DirectoryResult<Vec<Employee>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
