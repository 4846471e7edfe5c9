//! Repository port for the remote task store.
//!
//! The remote store is an external REST collaborator: list retrieval,
//! creation, update keyed by id, and deletion. Implementations must not
//! cache; the board keeps its own snapshot and refreshes it explicitly or
//! via the live channel.

use crate::board::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Remote task store contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetches the full current task list. Ordering is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Transport`] when the store cannot be
    /// reached.
    async fn fetch_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Creates a task and returns the stored record, id assigned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Rejected`] when the store refuses the
    /// record or [`TaskRepositoryError::Transport`] on transport failure.
    async fn create(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Replaces the task stored under `id` and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task exists under
    /// the identifier.
    async fn update(&self, id: &TaskId, task: &Task) -> TaskRepositoryResult<Task>;

    /// Deletes the task stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task exists under
    /// the identifier.
    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The remote store rejected the mutation.
    #[error("remote store rejected the request: {0}")]
    Rejected(String),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
