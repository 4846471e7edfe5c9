//! Behavioural integration tests for the live snapshot feed.
//!
//! Drives the full wiring an embedder uses: a feed worker on the store
//! client, the console listening for pushed snapshots, and the reconnect
//! path after a dropped connection.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use backboard::board::adapters::RecordingNotifier;
use backboard::board::adapters::memory::{InMemoryLiveChannel, InMemoryTaskRepository};
use backboard::board::domain::{Task, TaskId, TaskStatus};
use backboard::board::ports::{LiveChannel, Notifier};
use backboard::board::services::{BoardConsole, LiveFeedWorker};
use backboard::directory::{Employee, InMemoryEmployeeRepository};
use mockable::DefaultClock;
use std::sync::Arc;
use std::time::Duration;

const TEST_BACKOFF: Duration = Duration::from_millis(20);

type Console = BoardConsole<InMemoryTaskRepository, InMemoryEmployeeRepository, DefaultClock>;

fn build_console(repository: &InMemoryTaskRepository) -> Console {
    let directory = InMemoryEmployeeRepository::with_employees(vec![
        Employee::new("e1", "Asha Rao").with_email("asha@example.com"),
    ]);
    let notifier: Arc<dyn Notifier> = Arc::new(RecordingNotifier::new());
    BoardConsole::new(
        Arc::new(repository.clone()),
        Arc::new(directory),
        notifier,
        Arc::new(DefaultClock),
    )
}

fn pushed_task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: Some(TaskId::new(id)),
        title: "Payment Reconciliation".to_owned(),
        status,
        assigned_to: "e1".to_owned(),
        ..Task::default()
    }
}

async fn wait_until(description: &str, mut condition: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect(description);
}

#[tokio::test(flavor = "multi_thread")]
async fn pushed_snapshots_flow_into_the_console() {
    let repository = InMemoryTaskRepository::new();
    let channel = Arc::new(InMemoryLiveChannel::new());
    let mut console = build_console(&repository);
    console.init().await;

    let shared: Arc<dyn LiveChannel> = channel.clone();
    let _handle =
        LiveFeedWorker::spawn_with_backoff(shared, console.store().clone(), TEST_BACKOFF);
    let mut listener = console.listener();

    wait_until("worker should connect", || channel.subscriber_count() > 0).await;
    channel
        .publish_snapshot(&[pushed_task("10", TaskStatus::InProgress)])
        .expect("snapshot should encode");

    tokio::time::timeout(Duration::from_secs(2), listener.changed())
        .await
        .expect("snapshot should arrive")
        .expect("store should stay alive");
    let snapshot = listener.borrow_and_update().clone();
    console.apply_snapshot(snapshot);

    let task = console.tasks().first().expect("one task");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.assigned_to_name.as_deref(), Some("Asha Rao"));
}

#[tokio::test(flavor = "multi_thread")]
async fn feed_recovers_after_a_dropped_connection() {
    let repository = InMemoryTaskRepository::new();
    let channel = Arc::new(InMemoryLiveChannel::new());
    let console = build_console(&repository);

    let shared: Arc<dyn LiveChannel> = channel.clone();
    let _handle =
        LiveFeedWorker::spawn_with_backoff(shared, console.store().clone(), TEST_BACKOFF);

    wait_until("worker should connect", || channel.subscriber_count() > 0).await;
    channel.reset();
    wait_until("worker should reconnect", || channel.subscriber_count() > 0).await;

    channel
        .publish_snapshot(&[pushed_task("11", TaskStatus::OnHold)])
        .expect("snapshot should encode");
    wait_until("snapshot should apply", || {
        console.store().current().len() == 1
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_push_leaves_the_console_state_intact() {
    let repository = InMemoryTaskRepository::with_tasks(vec![pushed_task(
        "12",
        TaskStatus::Pending,
    )]);
    let channel = Arc::new(InMemoryLiveChannel::new());
    let mut console = build_console(&repository);
    console.init().await;

    let shared: Arc<dyn LiveChannel> = channel.clone();
    let _handle =
        LiveFeedWorker::spawn_with_backoff(shared, console.store().clone(), TEST_BACKOFF);
    wait_until("worker should connect", || channel.subscriber_count() > 0).await;

    let raw_before = console.store().current();
    let resolved_before = console.tasks().to_vec();
    channel.publish_raw("not a snapshot at all");
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(console.store().current(), raw_before);
    assert_eq!(console.tasks(), resolved_before.as_slice());
}
