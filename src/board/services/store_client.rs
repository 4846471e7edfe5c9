//! Client for the remote task store.
//!
//! Owns the board's authoritative in-memory task list as a watch cell:
//! `load_all` and the live feed both replace it wholesale, and consumers
//! observe it through [`TaskStoreClient::listen`]. Mutations (`add`,
//! `update`, `delete`) go straight to the repository and deliberately do
//! NOT touch local state — every successful mutation is expected to be
//! followed by a reload or by the live channel pushing the new canonical
//! list.

use crate::board::{
    domain::{ModuleType, Task, TaskId, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde_json::Map;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

const DEFAULT_TITLE: &str = "Untitled";
const DEFAULT_CATEGORY: &str = "General Task";
const DEFAULT_ASSIGNEE: &str = "Unassigned";
const DEFAULT_CREATED_BY: &str = "System";

/// Request payload for creating a task.
///
/// Every field is optional; [`TaskStoreClient::add`] fills backend-required
/// defaults for anything omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    module_type: Option<ModuleType>,
    priority: Option<TaskPriority>,
    status: Option<TaskStatus>,
    category: Option<String>,
    assigned_to: Option<String>,
    due_date: Option<NaiveDate>,
    reminder_date: Option<NaiveDate>,
    notes: Option<String>,
}

impl CreateTaskRequest {
    /// Creates an empty request; defaults apply to every field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the department module.
    #[must_use]
    pub const fn with_module_type(mut self, module_type: ModuleType) -> Self {
        self.module_type = Some(module_type);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the reminder date.
    #[must_use]
    pub const fn with_reminder_date(mut self, reminder_date: NaiveDate) -> Self {
        self.reminder_date = Some(reminder_date);
        self
    }

    /// Sets the initial notes log.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds a request from an edited task draft.
    ///
    /// Empty strings count as "not provided" so that create defaults apply,
    /// matching the backend's expectations for blank form fields.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: non_empty(&task.title),
            description: non_empty(&task.description),
            module_type: Some(task.module_type),
            priority: Some(task.priority),
            status: Some(task.status),
            category: non_empty(&task.category),
            assigned_to: non_empty(&task.assigned_to),
            due_date: task.due_date,
            reminder_date: task.reminder_date,
            notes: non_empty(&task.notes),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Service-level errors for task store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreClientError {
    /// An update was attempted on a task that has never been created.
    #[error("task update requires an identifier")]
    MissingTaskId,

    /// The repository rejected or failed the operation.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store client operations.
pub type StoreClientResult<T> = Result<T, StoreClientError>;

/// Remote task store client with a locally observable snapshot.
pub struct TaskStoreClient<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    cell: Arc<watch::Sender<Vec<Task>>>,
}

impl<R, C> Clone for TaskStoreClient<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<R, C> TaskStoreClient<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a client with an empty local snapshot.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        let (cell, _) = watch::channel(Vec::new());
        Self {
            repository,
            clock,
            cell: Arc::new(cell),
        }
    }

    /// Returns a continuously-updated view of the task list.
    #[must_use]
    pub fn listen(&self) -> watch::Receiver<Vec<Task>> {
        self.cell.subscribe()
    }

    /// Returns a copy of the current task list.
    #[must_use]
    pub fn current(&self) -> Vec<Task> {
        self.cell.borrow().clone()
    }

    /// Replaces the local task list wholesale.
    ///
    /// Both callers (explicit reloads and the live feed) carry idempotent
    /// full snapshots, so the last write in real time winning is sound.
    pub fn replace(&self, tasks: Vec<Task>) {
        self.cell.send_replace(tasks);
    }

    /// Fetches the full current task list and replaces local state with it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreClientError::Repository`] when the fetch fails; the
    /// previous snapshot is retained.
    pub async fn load_all(&self) -> StoreClientResult<Vec<Task>> {
        let tasks = self.repository.fetch_all().await?;
        self.replace(tasks.clone());
        Ok(tasks)
    }

    /// Creates a task, filling backend-required defaults for omitted
    /// fields. Local state is NOT updated; reload or wait for the live
    /// channel.
    ///
    /// # Errors
    ///
    /// Returns [`StoreClientError::Repository`] when creation fails.
    pub async fn add(&self, request: CreateTaskRequest) -> StoreClientResult<Task> {
        let now = self.clock.utc();
        let task = Task {
            id: None,
            title: request.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            description: request.description.unwrap_or_default(),
            module_type: request.module_type.unwrap_or_default(),
            priority: request.priority.unwrap_or_default(),
            status: request.status.unwrap_or_default(),
            category: request
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
            assigned_to: request
                .assigned_to
                .unwrap_or_else(|| DEFAULT_ASSIGNEE.to_owned()),
            assigned_to_name: None,
            assigned_email: None,
            due_date: Some(request.due_date.unwrap_or_else(|| now.date_naive())),
            reminder_date: request.reminder_date,
            notes: request.notes.unwrap_or_default(),
            attachments: Vec::new(),
            last_status: None,
            created_by: DEFAULT_CREATED_BY.to_owned(),
            created_at: Some(now),
            updated_at: Some(now),
            extra: Map::new(),
        };
        Ok(self.repository.create(&task).await?)
    }

    /// Updates a task, refreshing its update stamp. Local state is NOT
    /// updated; reload or wait for the live channel.
    ///
    /// # Errors
    ///
    /// Fails fast with [`StoreClientError::MissingTaskId`] before any
    /// repository call when the task has no identifier; otherwise returns
    /// [`StoreClientError::Repository`] on repository failure.
    pub async fn update(&self, task: &Task) -> StoreClientResult<Task> {
        let Some(id) = task.id.clone() else {
            return Err(StoreClientError::MissingTaskId);
        };
        let mut payload = task.clone();
        payload.updated_at = Some(self.clock.utc());
        Ok(self.repository.update(&id, &payload).await?)
    }

    /// Deletes a task by id. Local state is NOT updated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreClientError::Repository`] when deletion fails.
    pub async fn delete(&self, id: &TaskId) -> StoreClientResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
