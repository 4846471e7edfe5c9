//! Behavioural integration tests for the task board flow.
//!
//! These exercise the public API end-to-end against the in-memory
//! adapters: directory-first initialization, the two-phase drag
//! transition commit, and the cancel-equals-reload guarantee.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use backboard::board::adapters::RecordingNotifier;
use backboard::board::adapters::memory::InMemoryTaskRepository;
use backboard::board::domain::{Task, TaskId, TaskStatus};
use backboard::board::ports::{Notifier, ToastKind};
use backboard::board::services::{BoardConsole, DropOutcome, TransitionError};
use backboard::directory::{Employee, InMemoryEmployeeRepository};
use mockable::DefaultClock;
use std::sync::Arc;

type Console = BoardConsole<InMemoryTaskRepository, InMemoryEmployeeRepository, DefaultClock>;

fn pending_lead_task() -> Task {
    Task {
        id: Some(TaskId::new("1")),
        title: "New Lead Follow-Up".to_owned(),
        status: TaskStatus::Pending,
        assigned_to: "e1".to_owned(),
        ..Task::default()
    }
}

fn build_console(
    repository: &InMemoryTaskRepository,
    directory: &InMemoryEmployeeRepository,
    notifier: &Arc<RecordingNotifier>,
) -> Console {
    let shared: Arc<dyn Notifier> = notifier.clone();
    BoardConsole::new(
        Arc::new(repository.clone()),
        Arc::new(directory.clone()),
        shared,
        Arc::new(DefaultClock),
    )
}

fn staffed_directory() -> InMemoryEmployeeRepository {
    InMemoryEmployeeRepository::with_employees(vec![
        Employee::new("e1", "Asha Rao").with_email("asha@example.com"),
    ])
}

#[tokio::test(flavor = "multi_thread")]
async fn dragging_pending_to_completed_round_trips_through_the_store() {
    let repository = InMemoryTaskRepository::with_tasks(vec![pending_lead_task()]);
    let directory = staffed_directory();
    let notifier = Arc::new(RecordingNotifier::new());
    let mut console = build_console(&repository, &directory, &notifier);

    console.init().await;
    let fetches_after_init = repository.fetch_call_count();
    let task = console.tasks().first().expect("one task").clone();

    let outcome = console.on_drop(&task, TaskStatus::Pending, TaskStatus::Completed);
    assert_eq!(outcome, DropOutcome::ConfirmationRequired);
    console.set_transition_note("done");
    console
        .confirm_transition()
        .await
        .expect("confirm should succeed");

    // Exactly one update reached the store, with the new status and the
    // tagged note, and free of transient UI-only fields.
    assert_eq!(repository.update_call_count(), 1);
    let payload = repository.last_update().expect("payload captured");
    assert_eq!(payload.status, TaskStatus::Completed);
    assert!(payload.notes.contains("[Status Change] done"));
    assert_eq!(payload.last_status, None);
    assert_eq!(payload.assigned_to_name, None);

    // The confirm is followed by a fresh full-list fetch.
    assert_eq!(repository.fetch_call_count(), fetches_after_init + 1);

    let columns = console.columns();
    let completed = columns
        .column(TaskStatus::Completed)
        .expect("known column");
    assert_eq!(completed.tasks().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn confirming_without_a_note_warns_and_sends_nothing() {
    let repository = InMemoryTaskRepository::with_tasks(vec![pending_lead_task()]);
    let directory = staffed_directory();
    let notifier = Arc::new(RecordingNotifier::new());
    let mut console = build_console(&repository, &directory, &notifier);

    console.init().await;
    let task = console.tasks().first().expect("one task").clone();
    console.on_drop(&task, TaskStatus::Pending, TaskStatus::Completed);

    let result = console.confirm_transition().await;

    assert!(matches!(result, Err(TransitionError::NoteRequired)));
    assert_eq!(repository.update_call_count(), 0);
    // The optimistic move stays staged for retry, aimed at the new column.
    let pending = console.pending_transition().expect("still pending");
    assert_eq!(pending.new_status(), TaskStatus::Completed);
    assert!(
        notifier
            .toasts()
            .iter()
            .any(|toast| toast.kind == ToastKind::Warning
                && toast.text.contains("Note is required"))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn cancelling_is_equivalent_to_a_fresh_reload() {
    let repository = InMemoryTaskRepository::with_tasks(vec![pending_lead_task()]);
    let directory = staffed_directory();
    let notifier = Arc::new(RecordingNotifier::new());
    let mut console = build_console(&repository, &directory, &notifier);

    console.init().await;
    let task = console.tasks().first().expect("one task").clone();

    // Two visual moves before the user changes their mind.
    console.on_drop(&task, TaskStatus::Pending, TaskStatus::Completed);
    console.on_drop(&task, TaskStatus::Completed, TaskStatus::OnHold);
    console.cancel_transition().await;

    assert!(console.pending_transition().is_none());
    assert_eq!(repository.update_call_count(), 0);
    let board_task = console.tasks().first().expect("one task");
    assert_eq!(board_task.status, TaskStatus::Pending);
}

#[tokio::test(flavor = "multi_thread")]
async fn late_directory_load_resolves_names_without_losing_assignees() {
    let repository = InMemoryTaskRepository::with_tasks(vec![pending_lead_task()]);
    let directory = staffed_directory();
    directory.set_offline(true);
    let notifier = Arc::new(RecordingNotifier::new());
    let mut console = build_console(&repository, &directory, &notifier);

    console.init().await;
    let unresolved = console.tasks().first().expect("one task");
    assert_eq!(unresolved.assigned_to_name, None);
    assert_eq!(unresolved.assigned_to, "e1");

    directory.set_offline(false);
    console.init().await;
    let resolved = console.tasks().first().expect("one task");
    assert_eq!(resolved.assigned_to_name.as_deref(), Some("Asha Rao"));
    assert_eq!(resolved.assigned_to, "e1");
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_snapshot_during_pending_confirmation_is_flagged() {
    let repository = InMemoryTaskRepository::with_tasks(vec![pending_lead_task()]);
    let directory = staffed_directory();
    let notifier = Arc::new(RecordingNotifier::new());
    let mut console = build_console(&repository, &directory, &notifier);

    console.init().await;
    let task = console.tasks().first().expect("one task").clone();
    console.on_drop(&task, TaskStatus::Pending, TaskStatus::Completed);

    // Another user moved the same task while the dialog is open.
    console.apply_snapshot(vec![Task {
        status: TaskStatus::InProgress,
        ..pending_lead_task()
    }]);

    let pending = console.pending_transition().expect("still pending");
    assert!(pending.is_conflicted());
    assert_eq!(pending.old_status(), TaskStatus::Pending);
    assert!(
        notifier
            .toasts()
            .iter()
            .any(|toast| toast.kind == ToastKind::Warning)
    );
}
