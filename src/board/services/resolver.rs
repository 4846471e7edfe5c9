//! Assignee display resolution.
//!
//! Display name and contact address are derived by joining the employee
//! directory against each task's assignee; they are never trusted from the
//! wire. Resolution is a pure function of the task list and the directory
//! and must be recomputed whenever either input changes.

use crate::board::domain::Task;
use crate::directory::Employee;
use tracing::warn;

/// Placeholder display name when the assignee is not in the directory.
pub const UNRESOLVED_ASSIGNEE: &str = "-";

/// Decorates each task with assignee display fields.
///
/// With an empty directory the list passes through untouched so existing
/// assignee data is never erased while the directory is still loading.
/// Otherwise every task gains a display name (directory match, else the
/// `"-"` placeholder) and a contact address (directory match; else the
/// assignee value itself when it already looks like an email address; else
/// none).
#[must_use]
pub fn resolve_assignees(tasks: Vec<Task>, employees: &[Employee]) -> Vec<Task> {
    if employees.is_empty() {
        warn!("employee directory not loaded; leaving assignees unresolved");
        return tasks;
    }

    tasks
        .into_iter()
        .map(|mut task| {
            match employees
                .iter()
                .find(|employee| employee.id.as_str() == task.assigned_to)
            {
                Some(employee) => {
                    task.assigned_to_name = Some(employee.name.clone());
                    task.assigned_email = employee.email.clone();
                }
                None => {
                    task.assigned_to_name = Some(UNRESOLVED_ASSIGNEE.to_owned());
                    task.assigned_email = email_like(&task.assigned_to);
                }
            }
            task
        })
        .collect()
}

/// Normalizes a task's assignee before it is persisted.
///
/// An empty assignee clears the contact address; a directory match
/// canonicalizes `assigned_to` to the directory id and copies the address;
/// an unmatched assignee keeps itself as the address only when it already
/// looks like one.
pub fn apply_assigned_email(task: &mut Task, employees: &[Employee]) {
    let assignee = task.assigned_to.trim().to_owned();
    if assignee.is_empty() {
        task.assigned_email = None;
        return;
    }

    match employees
        .iter()
        .find(|employee| employee.id.as_str() == assignee)
    {
        Some(employee) => {
            task.assigned_to = employee.id.as_str().to_owned();
            task.assigned_email = employee.email.clone();
        }
        None => {
            task.assigned_email = email_like(&assignee);
        }
    }
}

fn email_like(value: &str) -> Option<String> {
    if value.contains('@') {
        Some(value.to_owned())
    } else {
        None
    }
}
