//! Board console: the composition root the surrounding UI binds against.
//!
//! Wires the store client, the employee directory, the drag transition
//! controller, and form editing state together, with every collaborator
//! injected at construction. Exposes the resolved task list, the column
//! projection, and the pending drag-confirmation state.
//!
//! Live updates are driven from outside: spawn a
//! [`LiveFeedWorker`](crate::board::services::LiveFeedWorker) on the
//! store returned by [`BoardConsole::store`], then feed changes observed
//! on [`BoardConsole::listener`] back through
//! [`BoardConsole::apply_snapshot`].

use crate::board::domain::{ModuleType, Task, TaskStatus, module_for_title};
use crate::board::ports::{Notifier, TaskRepository};
use crate::board::services::projector::BoardProjection;
use crate::board::services::resolver::{apply_assigned_email, resolve_assignees};
use crate::board::services::sanitize::sanitized;
use crate::board::services::store_client::{
    CreateTaskRequest, StoreClientError, StoreClientResult, TaskStoreClient,
};
use crate::board::services::transition::{
    DragTransitionController, DropOutcome, PendingTransition, TransitionError,
};
use crate::directory::{Employee, EmployeeRepository};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, error, warn};

const NO_SELECTION: &str = "No employee selected";

/// Errors surfaced by the console's save flow.
#[derive(Debug, Error)]
pub enum SaveError {
    /// A save is already in flight; the duplicate submission is dropped.
    #[error("a save is already in flight")]
    InFlight,

    /// The store rejected or failed the operation.
    #[error(transparent)]
    Store(#[from] StoreClientError),
}

/// Top-level task board state.
pub struct BoardConsole<R, E, C>
where
    R: TaskRepository,
    E: EmployeeRepository,
    C: Clock + Send + Sync,
{
    store: TaskStoreClient<R, C>,
    directory: Arc<E>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<C>,
    controller: DragTransitionController<R, C>,
    employees: Vec<Employee>,
    tasks: Vec<Task>,
    editing: Option<Task>,
    saving: bool,
}

impl<R, E, C> BoardConsole<R, E, C>
where
    R: TaskRepository,
    E: EmployeeRepository,
    C: Clock + Send + Sync,
{
    /// Creates a console over the given collaborators.
    pub fn new(
        repository: Arc<R>,
        directory: Arc<E>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<C>,
    ) -> Self {
        let store = TaskStoreClient::new(repository, Arc::clone(&clock));
        let controller = DragTransitionController::new(store.clone(), Arc::clone(&notifier));
        Self {
            store,
            directory,
            notifier,
            clock,
            controller,
            employees: Vec::new(),
            tasks: Vec::new(),
            editing: None,
            saving: false,
        }
    }

    /// The underlying store client, for wiring the live feed.
    #[must_use]
    pub const fn store(&self) -> &TaskStoreClient<R, C> {
        &self.store
    }

    /// A continuously-updated view of the raw (unresolved) task list.
    #[must_use]
    pub fn listener(&self) -> watch::Receiver<Vec<Task>> {
        self.store.listen()
    }

    /// Loads the employee directory, then the task list.
    ///
    /// The directory loads first so names resolve on the initial render; a
    /// directory failure is logged and the board proceeds with an empty
    /// directory rather than staying blank.
    pub async fn init(&mut self) {
        match self.directory.fetch_all().await {
            Ok(employees) => self.employees = employees,
            Err(err) => {
                error!(error = %err, "employee directory load failed");
                self.employees = Vec::new();
            }
        }
        self.load_tasks().await;
    }

    /// Fetches the task list and installs it. Failure is logged and the
    /// previous list retained; loading is never fatal.
    pub async fn load_tasks(&mut self) {
        match self.store.load_all().await {
            Ok(tasks) => self.install(tasks),
            Err(err) => error!(error = %err, "failed to load tasks"),
        }
    }

    /// Installs a snapshot pushed by the live channel.
    pub fn apply_snapshot(&mut self, tasks: Vec<Task>) {
        self.install(tasks);
    }

    /// The current task list, assignee display fields resolved.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The cached employee directory.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Projects the current task list into board columns.
    #[must_use]
    pub fn columns(&self) -> BoardProjection<'_> {
        BoardProjection::project(&self.tasks)
    }

    /// Whether a task is past due and not completed.
    #[must_use]
    pub fn is_overdue(&self, task: &Task) -> bool {
        task.is_overdue(&*self.clock)
    }

    // ------------------------------------------------------------------
    // Drag transitions
    // ------------------------------------------------------------------

    /// Hands a drop gesture to the transition controller.
    pub fn on_drop(&mut self, task: &Task, source: TaskStatus, target: TaskStatus) -> DropOutcome {
        self.controller.on_drop(task, source, target)
    }

    /// Sets the annotation on the pending transition.
    pub fn set_transition_note(&mut self, note: impl Into<String>) {
        self.controller.set_note(note);
    }

    /// The pending transition, for the confirmation dialog to bind.
    #[must_use]
    pub const fn pending_transition(&self) -> Option<&PendingTransition> {
        self.controller.pending()
    }

    /// Whether a transition confirm is in flight.
    #[must_use]
    pub const fn is_drag_saving(&self) -> bool {
        self.controller.is_saving()
    }

    /// Confirms the pending transition and refreshes the board on success.
    ///
    /// # Errors
    ///
    /// Propagates [`TransitionError`] from the controller; the pending
    /// state survives validation and store failures.
    pub async fn confirm_transition(&mut self) -> Result<Task, TransitionError> {
        let result = self.controller.confirm(&self.employees).await;
        if result.is_ok() {
            self.refresh_from_store();
        }
        result
    }

    /// Cancels the pending transition and resynchronizes to server state.
    pub async fn cancel_transition(&mut self) {
        self.controller.cancel().await;
        self.refresh_from_store();
    }

    // ------------------------------------------------------------------
    // Form editing
    // ------------------------------------------------------------------

    /// Starts editing a blank task draft.
    pub fn begin_add(&mut self) {
        self.editing = Some(Task {
            module_type: ModuleType::Rent,
            ..Task::default()
        });
    }

    /// Starts editing a copy of an existing task.
    pub fn begin_edit(&mut self, task: &Task) {
        self.editing = Some(task.clone());
    }

    /// The task being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    /// Mutable access to the task being edited, for form binding.
    pub fn editing_mut(&mut self) -> Option<&mut Task> {
        self.editing.as_mut()
    }

    /// Discards the editing draft.
    pub fn close_form(&mut self) {
        self.editing = None;
    }

    /// Infers the department module from the editing draft's title.
    ///
    /// Unmatched titles keep the draft's current module and log a warning.
    pub fn auto_set_module(&mut self) {
        let Some(editing) = self.editing.as_mut() else {
            return;
        };
        if editing.title.is_empty() {
            return;
        }
        match module_for_title(&editing.title) {
            Some(module_type) => editing.module_type = module_type,
            None => warn!(title = %editing.title, "no module mapping for task title"),
        }
    }

    /// Contact address to show for the editing draft's assignee.
    #[must_use]
    pub fn assigned_email_display(&self) -> String {
        let Some(editing) = self.editing.as_ref() else {
            return NO_SELECTION.to_owned();
        };
        if let Some(email) = editing.assigned_email.as_ref() {
            if !email.is_empty() {
                return email.clone();
            }
        }
        if editing.assigned_to.is_empty() {
            return NO_SELECTION.to_owned();
        }
        self.employees
            .iter()
            .find(|employee| employee.id.as_str() == editing.assigned_to)
            .and_then(|employee| employee.email.clone())
            .unwrap_or_else(|| NO_SELECTION.to_owned())
    }

    /// Persists an edited draft: create when it has no id, update
    /// otherwise.
    ///
    /// Records the prior status as a transient hint when an existing
    /// task's status changed, recomputes the assignee address, and strips
    /// UI-only fields. Local state is refreshed by the live channel, not
    /// here.
    ///
    /// # Errors
    ///
    /// [`SaveError::InFlight`] when a save is already running;
    /// [`SaveError::Store`] when the store rejects the operation (the
    /// draft stays open for retry).
    pub async fn save(&mut self, task: &Task) -> Result<Task, SaveError> {
        if self.saving {
            return Err(SaveError::InFlight);
        }
        self.saving = true;

        let mut draft = task.clone();
        if let Some(id) = draft.id.as_ref() {
            let original = self
                .tasks
                .iter()
                .find(|candidate| candidate.id.as_ref() == Some(id));
            if let Some(original) = original {
                if original.status != draft.status {
                    draft.last_status = Some(original.status);
                }
            }
        }
        apply_assigned_email(&mut draft, &self.employees);
        let payload = sanitized(&draft);

        let result = if payload.id.is_some() {
            self.store.update(&payload).await
        } else {
            self.store.add(CreateTaskRequest::from_task(&payload)).await
        };

        match result {
            Ok(saved) => {
                self.notifier.success("Task saved successfully");
                self.editing = None;
                self.saving = false;
                Ok(saved)
            }
            Err(err) => {
                error!(error = %err, "failed to save task");
                self.notifier.error("Failed to save task");
                self.saving = false;
                Err(err.into())
            }
        }
    }

    /// Deletes a task after explicit confirmation.
    ///
    /// Returns `Ok(false)` without any remote call when the task has no id
    /// or the caller did not confirm; deletion is not locally reversible.
    ///
    /// # Errors
    ///
    /// Returns [`StoreClientError`] when the remote delete fails.
    pub async fn delete(&self, task: &Task, confirmed: bool) -> StoreClientResult<bool> {
        let Some(id) = task.id.as_ref() else {
            return Ok(false);
        };
        if !confirmed {
            return Ok(false);
        }
        match self.store.delete(id).await {
            Ok(()) => {
                debug!(id = %id, title = %task.title, "task deleted");
                Ok(true)
            }
            Err(err) => {
                error!(error = %err, "task delete failed");
                Err(err)
            }
        }
    }

    fn install(&mut self, tasks: Vec<Task>) {
        let resolved = resolve_assignees(tasks, &self.employees);
        self.controller.observe_snapshot(&resolved);
        self.tasks = resolved;
    }

    fn refresh_from_store(&mut self) {
        let current = self.store.current();
        self.install(current);
    }
}
