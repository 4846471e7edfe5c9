//! Payload sanitization before persistence.

use crate::board::domain::Task;

/// Backend bookkeeping keys that must never be echoed back in a payload.
pub const BOOKKEEPING_MARKERS: [&str; 3] = ["__v", "_tempId", "statusChanged"];

/// Returns a copy of the task with UI-only fields removed.
///
/// Strips the derived display name, the transient prior-status hint, and
/// the bookkeeping markers from the extras map. The derived contact
/// address is intentionally kept: the backend uses it to notify the
/// assignee. Sanitizing an already-sanitized task is a no-op.
#[must_use]
pub fn sanitized(task: &Task) -> Task {
    let mut cleaned = task.clone();
    cleaned.assigned_to_name = None;
    cleaned.last_status = None;
    for marker in BOOKKEEPING_MARKERS {
        cleaned.extra.remove(marker);
    }
    cleaned
}
