//! The task record and its domain operations.

use super::{ModuleType, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tag prefixed to notes entries recorded by a status change.
pub const STATUS_CHANGE_TAG: &str = "[Status Change]";

/// A unit of back-office work as exchanged with the remote store.
///
/// This is a wire record: full board snapshots replace the local list
/// wholesale, so the shape mirrors the backend document. Fields the backend
/// sends that the board does not model round-trip through [`Task::extra`].
///
/// `assigned_to_name` and `assigned_email` are derived display fields. They
/// are recomputed locally from the employee directory and must never be
/// treated as authoritative; the name is stripped before persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Remote-assigned identifier; `None` exclusively means "not yet
    /// created".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// Short label; also drives module inference.
    #[serde(default)]
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Department workflow the task belongs to.
    #[serde(default)]
    pub module_type: ModuleType,
    /// Urgency.
    #[serde(default)]
    pub priority: TaskPriority,
    /// Board lifecycle status; selects the board column.
    #[serde(default)]
    pub status: TaskStatus,
    /// Coarse classification used by reporting.
    #[serde(default)]
    pub category: String,
    /// Assignee: an employee id, or occasionally a raw email address.
    #[serde(default)]
    pub assigned_to: String,
    /// Derived display name for the assignee; never authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_name: Option<String>,
    /// Derived contact address for the assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_email: Option<String>,
    /// Calendar due date; tasks past it and not completed are overdue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Optional reminder date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_date: Option<NaiveDate>,
    /// Append-only free-text log.
    #[serde(default)]
    pub notes: String,
    /// Attachment references.
    #[serde(default)]
    pub attachments: Vec<String>,
    /// Transient hint recording the status immediately before an in-flight
    /// update; stripped before persistence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_status: Option<TaskStatus>,
    /// Who created the task.
    #[serde(default)]
    pub created_by: String,
    /// Creation stamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update stamp; refreshed on every update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Unmodeled backend fields, preserved on round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Appends a tagged status-change entry to the notes log.
    ///
    /// Notes are append-only: prior entries are never replaced.
    pub fn append_status_note(&mut self, note: &str) {
        if self.notes.is_empty() {
            self.notes = format!("{STATUS_CHANGE_TAG} {note}");
        } else {
            self.notes = format!("{}\n{STATUS_CHANGE_TAG} {note}", self.notes);
        }
    }

    /// Whether the task is past its due date and not yet completed.
    ///
    /// A task due today is not overdue.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        self.due_date.is_some_and(|due| {
            self.status != TaskStatus::Completed && due < clock.utc().date_naive()
        })
    }
}
