//! Drag-and-drop status transition control.
//!
//! A cross-column drop does not persist anything by itself: the visual
//! move is optimistic, and the transition is held pending until the user
//! supplies a note and confirms. Confirm persists the cleaned payload and
//! reloads the canonical list; cancel discards the pending edit and also
//! reloads, because the column arrays were already mutated during the drag
//! and a precise in-memory undo is not attempted.

use crate::board::domain::{Task, TaskStatus};
use crate::board::ports::{Notifier, TaskRepository};
use crate::board::services::resolver::apply_assigned_email;
use crate::board::services::sanitize::sanitized;
use crate::board::services::store_client::{StoreClientError, TaskStoreClient};
use crate::directory::Employee;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

/// Result of handing a drop gesture to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Same-column drop: a pure reposition, no transition, no network call.
    Reordered,
    /// Cross-column drop onto a column with the task's current status.
    NoChange,
    /// A transition is now pending and needs a note plus confirmation.
    ConfirmationRequired,
}

/// A staged status transition awaiting confirmation.
#[derive(Debug, Clone)]
pub struct PendingTransition {
    task: Task,
    old_status: TaskStatus,
    new_status: TaskStatus,
    note: String,
    conflicted: bool,
}

impl PendingTransition {
    /// Working copy of the moved task, isolated from the board list.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Status the task had when the drag started.
    #[must_use]
    pub const fn old_status(&self) -> TaskStatus {
        self.old_status
    }

    /// Status of the column the task was dropped into.
    #[must_use]
    pub const fn new_status(&self) -> TaskStatus {
        self.new_status
    }

    /// The annotation entered so far.
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Whether a live snapshot has shown a concurrent edit to this task.
    #[must_use]
    pub const fn is_conflicted(&self) -> bool {
        self.conflicted
    }
}

/// Errors surfaced by the transition controller.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// Confirm was called with no transition pending.
    #[error("no drag transition is pending")]
    NothingPending,

    /// Confirm was called while a save is already in flight.
    #[error("a save is already in flight")]
    SaveInFlight,

    /// The annotation is empty after trimming; the transition stays
    /// pending for retry.
    #[error("a status-change note is required")]
    NoteRequired,

    /// The remote update failed; the transition stays pending so the user
    /// can retry or cancel.
    #[error(transparent)]
    Store(#[from] StoreClientError),
}

/// State machine driving drag-and-drop status transitions.
///
/// At most one transition is pending at a time, and this controller is the
/// only component allowed to hold a task in an uncommitted, locally
/// mutated state. Every pending transition resolves to either
/// persisted-and-reloaded or discarded-and-reloaded.
pub struct DragTransitionController<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    store: TaskStoreClient<R, C>,
    notifier: Arc<dyn Notifier>,
    pending: Option<PendingTransition>,
    saving: bool,
}

impl<R, C> DragTransitionController<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates an idle controller.
    pub fn new(store: TaskStoreClient<R, C>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            pending: None,
            saving: false,
        }
    }

    /// Handles a drop gesture from one column onto another.
    ///
    /// The caller has already moved the task visually; this only decides
    /// whether that move needs confirmation. A same-column drop is a pure
    /// reposition and a drop onto a column matching the task's current
    /// status is a no-op — neither stages anything.
    pub fn on_drop(&mut self, task: &Task, source: TaskStatus, target: TaskStatus) -> DropOutcome {
        if source == target {
            return DropOutcome::Reordered;
        }
        if task.status == target {
            return DropOutcome::NoChange;
        }

        self.pending = Some(PendingTransition {
            task: task.clone(),
            old_status: task.status,
            new_status: target,
            note: String::new(),
            conflicted: false,
        });
        DropOutcome::ConfirmationRequired
    }

    /// Replaces the annotation on the pending transition, if any.
    pub fn set_note(&mut self, note: impl Into<String>) {
        if let Some(pending) = self.pending.as_mut() {
            pending.note = note.into();
        }
    }

    /// The transition awaiting confirmation, for dialog binding.
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }

    /// Whether a confirm is currently in flight.
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    /// Confirms the pending transition.
    ///
    /// Builds the outgoing payload from the working copy: the new status,
    /// the annotation appended to the notes log as a tagged entry, the
    /// prior status recorded as a transient hint, assignee contact address
    /// recomputed against the directory, and UI-only fields stripped.
    /// Sends exactly one update; on success the pending state clears and
    /// the canonical list is reloaded.
    ///
    /// # Errors
    ///
    /// [`TransitionError::NoteRequired`] when the trimmed annotation is
    /// empty (warning toast, nothing sent, still pending);
    /// [`TransitionError::Store`] when the update fails (error toast,
    /// still pending so the user can retry or cancel);
    /// [`TransitionError::SaveInFlight`] / [`TransitionError::NothingPending`]
    /// on misuse.
    pub async fn confirm(&mut self, employees: &[Employee]) -> Result<Task, TransitionError> {
        if self.saving {
            return Err(TransitionError::SaveInFlight);
        }
        let Some(pending) = self.pending.as_ref() else {
            return Err(TransitionError::NothingPending);
        };
        self.saving = true;

        let note = pending.note.trim().to_owned();
        if note.is_empty() {
            self.notifier.warning("Note is required before changing status");
            self.saving = false;
            return Err(TransitionError::NoteRequired);
        }

        let mut working = pending.task.clone();
        working.status = pending.new_status;
        working.append_status_note(&note);
        working.last_status = Some(pending.old_status);
        apply_assigned_email(&mut working, employees);
        let payload = sanitized(&working);

        match self.store.update(&payload).await {
            Ok(updated) => {
                self.notifier.success("Status updated");
                self.pending = None;
                self.saving = false;
                if let Err(err) = self.store.load_all().await {
                    warn!(error = %err, "failed to reload tasks after status update");
                }
                Ok(updated)
            }
            Err(err) => {
                error!(error = %err, "status update failed");
                self.notifier.error("Status update failed");
                self.saving = false;
                Err(err.into())
            }
        }
    }

    /// Cancels the pending transition and resynchronizes to server state.
    ///
    /// No local-only revert is attempted; a fresh load is the correctness
    /// guarantee. A reload failure is logged, never fatal.
    pub async fn cancel(&mut self) {
        self.pending = None;
        self.saving = false;
        if let Err(err) = self.store.load_all().await {
            error!(error = %err, "failed to reload tasks on cancel");
        }
    }

    /// Checks an arriving snapshot against the pending transition.
    ///
    /// When another writer has already changed the task's status, the
    /// pending edit is flagged as conflicting and a warning is raised
    /// once; it is neither merged nor abandoned, and a later confirm still
    /// sends the originally recorded transition.
    pub fn observe_snapshot(&mut self, tasks: &[Task]) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        if pending.conflicted {
            return;
        }
        let Some(id) = pending.task.id.as_ref() else {
            return;
        };
        let Some(current) = tasks.iter().find(|task| task.id.as_ref() == Some(id)) else {
            return;
        };
        if current.status != pending.old_status {
            pending.conflicted = true;
            self.notifier
                .warning("This task was changed elsewhere while your update is pending");
        }
    }
}
