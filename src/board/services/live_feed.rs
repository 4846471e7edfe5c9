//! Worker that keeps the task list current from the live channel.
//!
//! Each message on the channel is a full replacement snapshot of the task
//! list, never a delta. A malformed message is logged and discarded with
//! the previous state retained; a lost or unopenable connection is retried
//! after a fixed delay, indefinitely, so the board stays eventually
//! consistent for as long as the process runs.

use crate::board::domain::Task;
use crate::board::ports::{LiveChannel, TaskRepository};
use crate::board::services::store_client::TaskStoreClient;
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Fixed delay between reconnect attempts.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(4);

/// Spawns and owns the live feed loop.
#[derive(Debug, Clone, Copy)]
pub struct LiveFeedWorker;

impl LiveFeedWorker {
    /// Spawns the feed loop with the standard reconnect delay.
    ///
    /// The returned handle aborts the loop when dropped; keep it alive for
    /// as long as the board should stay live.
    #[must_use]
    pub fn spawn<R, C>(
        channel: Arc<dyn LiveChannel>,
        store: TaskStoreClient<R, C>,
    ) -> LiveFeedHandle
    where
        R: TaskRepository + 'static,
        C: Clock + Send + Sync + 'static,
    {
        Self::spawn_with_backoff(channel, store, RECONNECT_DELAY)
    }

    /// Spawns the feed loop with a caller-chosen reconnect delay.
    #[must_use]
    pub fn spawn_with_backoff<R, C>(
        channel: Arc<dyn LiveChannel>,
        store: TaskStoreClient<R, C>,
        backoff: Duration,
    ) -> LiveFeedHandle
    where
        R: TaskRepository + 'static,
        C: Clock + Send + Sync + 'static,
    {
        LiveFeedHandle {
            task: tokio::spawn(run(channel, store, backoff)),
        }
    }
}

/// Cancellation handle for a running live feed.
///
/// Dropping the handle cancels the subscription loop. In-flight store
/// mutations elsewhere are unaffected; only the feed stops.
#[derive(Debug)]
pub struct LiveFeedHandle {
    task: JoinHandle<()>,
}

impl LiveFeedHandle {
    /// Cancels the subscription loop.
    pub fn unsubscribe(self) {
        self.task.abort();
    }

    /// Whether the feed loop is still running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for LiveFeedHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<R, C>(channel: Arc<dyn LiveChannel>, store: TaskStoreClient<R, C>, backoff: Duration)
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    loop {
        match channel.connect().await {
            Ok(mut subscription) => {
                debug!("live channel connected");
                while let Some(message) = subscription.next_message().await {
                    match message {
                        Ok(raw) => apply_snapshot(&store, &raw),
                        Err(err) => {
                            warn!(error = %err, "live channel receive failed");
                            break;
                        }
                    }
                }
                warn!(delay = ?backoff, "live channel lost; reconnecting");
            }
            Err(err) => {
                warn!(error = %err, delay = ?backoff, "live channel connect failed; retrying");
            }
        }
        tokio::time::sleep(backoff).await;
    }
}

fn apply_snapshot<R, C>(store: &TaskStoreClient<R, C>, raw: &str)
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    match serde_json::from_str::<Vec<Task>>(raw) {
        Ok(snapshot) => store.replace(snapshot),
        Err(err) => warn!(error = %err, "discarding malformed live snapshot"),
    }
}
