//! Orchestration services for the task board.

mod console;
mod live_feed;
mod projector;
mod resolver;
mod sanitize;
mod store_client;
mod transition;

pub use console::{BoardConsole, SaveError};
pub use live_feed::{LiveFeedHandle, LiveFeedWorker, RECONNECT_DELAY};
pub use projector::{BOARD_COLUMNS, BoardColumn, BoardProjection};
pub use resolver::{UNRESOLVED_ASSIGNEE, apply_assigned_email, resolve_assignees};
pub use sanitize::{BOOKKEEPING_MARKERS, sanitized};
pub use store_client::{CreateTaskRequest, StoreClientError, StoreClientResult, TaskStoreClient};
pub use transition::{DragTransitionController, DropOutcome, PendingTransition, TransitionError};
