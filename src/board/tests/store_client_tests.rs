//! Unit tests for the task store client.

use crate::board::adapters::memory::InMemoryTaskRepository;
use crate::board::domain::{ModuleType, Task, TaskId, TaskPriority, TaskStatus};
use crate::board::ports::{TaskRepository, TaskRepositoryResult};
use crate::board::services::{CreateTaskRequest, StoreClientError, TaskStoreClient};
use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use mockall::mock;
use rstest::{fixture, rstest};
use std::sync::Arc;

mock! {
    Repo {}

    #[async_trait]
    impl TaskRepository for Repo {
        async fn fetch_all(&self) -> TaskRepositoryResult<Vec<Task>>;
        async fn create(&self, task: &Task) -> TaskRepositoryResult<Task>;
        async fn update(&self, id: &TaskId, task: &Task) -> TaskRepositoryResult<Task>;
        async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;
    }
}

type TestStore = TaskStoreClient<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn seeded() -> (InMemoryTaskRepository, TestStore) {
    let repository = InMemoryTaskRepository::with_tasks(vec![Task {
        id: Some(TaskId::new("1")),
        title: "New Lead Follow-Up".to_owned(),
        status: TaskStatus::Pending,
        ..Task::default()
    }]);
    let store = TaskStoreClient::new(Arc::new(repository.clone()), Arc::new(DefaultClock));
    (repository, store)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_without_id_fails_fast_before_any_repository_call() {
    // A mock with no expectations panics on any call, so success here
    // proves the guard fired before the network boundary.
    let store = TaskStoreClient::new(Arc::new(MockRepo::new()), Arc::new(DefaultClock));

    let result = store.update(&Task::default()).await;

    assert!(matches!(result, Err(StoreClientError::MissingTaskId)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_fills_backend_required_defaults() {
    let repository = InMemoryTaskRepository::new();
    let store = TaskStoreClient::new(Arc::new(repository), Arc::new(DefaultClock));

    let created = store
        .add(CreateTaskRequest::new())
        .await
        .expect("create should succeed");

    assert!(created.id.is_some());
    assert_eq!(created.title, "Untitled");
    assert_eq!(created.module_type, ModuleType::Other);
    assert_eq!(created.priority, TaskPriority::Medium);
    assert_eq!(created.status, TaskStatus::Pending);
    assert_eq!(created.category, "General Task");
    assert_eq!(created.assigned_to, "Unassigned");
    assert_eq!(created.created_by, "System");
    assert_eq!(created.due_date, Some(DefaultClock.utc().date_naive()));
    assert!(created.notes.is_empty());
    assert!(created.attachments.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_honours_provided_fields_over_defaults() {
    let repository = InMemoryTaskRepository::new();
    let store = TaskStoreClient::new(Arc::new(repository), Arc::new(DefaultClock));

    let request = CreateTaskRequest::new()
        .with_title("Schedule Site Visit")
        .with_module_type(ModuleType::Lead)
        .with_priority(TaskPriority::High)
        .with_status(TaskStatus::InProgress)
        .with_assigned_to("e1")
        .with_notes("call before noon");
    let created = store.add(request).await.expect("create should succeed");

    assert_eq!(created.title, "Schedule Site Visit");
    assert_eq!(created.module_type, ModuleType::Lead);
    assert_eq!(created.priority, TaskPriority::High);
    assert_eq!(created.status, TaskStatus::InProgress);
    assert_eq!(created.assigned_to, "e1");
    assert_eq!(created.notes, "call before noon");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mutations_do_not_touch_local_state(seeded: (InMemoryTaskRepository, TestStore)) {
    let (_, store) = seeded;

    store
        .add(CreateTaskRequest::new())
        .await
        .expect("create should succeed");

    assert!(store.current().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_all_replaces_the_local_snapshot(seeded: (InMemoryTaskRepository, TestStore)) {
    let (_, store) = seeded;
    let mut listener = store.listen();

    let loaded = store.load_all().await.expect("load should succeed");

    assert_eq!(loaded.len(), 1);
    assert_eq!(store.current(), loaded);
    listener.changed().await.expect("snapshot should change");
    assert_eq!(listener.borrow().clone(), loaded);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_refreshes_the_update_stamp(seeded: (InMemoryTaskRepository, TestStore)) {
    let (repository, store) = seeded;
    let task = store
        .load_all()
        .await
        .expect("load should succeed")
        .into_iter()
        .next()
        .expect("seeded task");
    assert_eq!(task.updated_at, None);

    store.update(&task).await.expect("update should succeed");

    let payload = repository.last_update().expect("update payload captured");
    assert!(payload.updated_at.is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_remote_record(seeded: (InMemoryTaskRepository, TestStore)) {
    let (_, store) = seeded;

    store
        .delete(&TaskId::new("1"))
        .await
        .expect("delete should succeed");

    assert!(store.load_all().await.expect("load should succeed").is_empty());
}
