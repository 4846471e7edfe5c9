//! In-memory task store double.
//!
//! Stands in for the remote REST store in tests and embedded use: mints
//! ids on create, keeps records in a shared map, and exposes call counters
//! plus a one-shot scripted failure so behavioural tests can assert exactly
//! which mutations reached the backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::board::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    tasks: HashMap<String, Task>,
    fail_next: Option<String>,
    fetch_calls: usize,
    update_calls: usize,
    last_update: Option<Task>,
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::transport(std::io::Error::other(err.to_string()))
}

impl InMemoryTaskRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with tasks, minting ids where absent.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let repository = Self::default();
        if let Ok(mut state) = repository.state.write() {
            for mut task in tasks {
                let id = task
                    .id
                    .get_or_insert_with(|| TaskId::new(Uuid::new_v4().to_string()))
                    .clone();
                state.tasks.insert(id.as_str().to_owned(), task);
            }
        }
        repository
    }

    /// Makes the next mutation (create, update, or delete) fail once with
    /// the given rejection reason.
    pub fn fail_next_mutation(&self, reason: impl Into<String>) {
        if let Ok(mut state) = self.state.write() {
            state.fail_next = Some(reason.into());
        }
    }

    /// Number of `fetch_all` calls served so far.
    #[must_use]
    pub fn fetch_call_count(&self) -> usize {
        self.state.read().map(|state| state.fetch_calls).unwrap_or(0)
    }

    /// Number of `update` calls served so far, including rejected ones.
    #[must_use]
    pub fn update_call_count(&self) -> usize {
        self.state
            .read()
            .map(|state| state.update_calls)
            .unwrap_or(0)
    }

    /// The payload of the most recent `update` call, if any.
    #[must_use]
    pub fn last_update(&self) -> Option<Task> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.last_update.clone())
    }
}

fn take_scripted_failure(state: &mut InMemoryStoreState) -> TaskRepositoryResult<()> {
    match state.fail_next.take() {
        Some(reason) => Err(TaskRepositoryError::Rejected(reason)),
        None => Ok(()),
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn fetch_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.fetch_calls += 1;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn create(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        take_scripted_failure(&mut state)?;

        let id = TaskId::new(Uuid::new_v4().to_string());
        let mut stored = task.clone();
        stored.id = Some(id.clone());
        state.tasks.insert(id.as_str().to_owned(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &TaskId, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.update_calls += 1;
        state.last_update = Some(task.clone());
        take_scripted_failure(&mut state)?;

        if !state.tasks.contains_key(id.as_str()) {
            return Err(TaskRepositoryError::NotFound(id.clone()));
        }
        let mut stored = task.clone();
        stored.id = Some(id.clone());
        state.tasks.insert(id.as_str().to_owned(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        take_scripted_failure(&mut state)?;

        state
            .tasks
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))
    }
}
