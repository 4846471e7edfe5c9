//! Port contracts for the task board's external collaborators.

mod live;
mod notify;
mod repository;

pub use live::{LiveChannel, LiveChannelError, LiveChannelResult, LiveSubscription};
pub use notify::{Notifier, Toast, ToastKind};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
