//! In-process live channel backed by a tokio broadcast hub.
//!
//! Every connected subscription sees every published message. `reset`
//! severs all open subscriptions (the broadcast sender is replaced), which
//! is how tests exercise the consumer's reconnect path; `set_offline`
//! makes connection attempts fail until cleared.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;
use tracing::debug;

use crate::board::{
    domain::Task,
    ports::{LiveChannel, LiveChannelError, LiveChannelResult, LiveSubscription},
};

const HUB_CAPACITY: usize = 16;

/// Broadcast-backed live snapshot channel.
#[derive(Debug)]
pub struct InMemoryLiveChannel {
    state: Arc<RwLock<HubState>>,
}

#[derive(Debug)]
struct HubState {
    sender: broadcast::Sender<String>,
    offline: bool,
}

fn lock_error(err: impl ToString) -> LiveChannelError {
    LiveChannelError::connect(std::io::Error::other(err.to_string()))
}

impl InMemoryLiveChannel {
    /// Creates a hub with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(HUB_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(HubState {
                sender,
                offline: false,
            })),
        }
    }

    /// Publishes a raw message to every open subscription.
    pub fn publish_raw(&self, message: impl Into<String>) {
        let Ok(state) = self.state.read() else {
            return;
        };
        if state.sender.send(message.into()).is_err() {
            debug!("live hub has no subscribers; message dropped");
        }
    }

    /// Serializes a full task list and publishes it as one snapshot.
    ///
    /// # Errors
    ///
    /// Returns the serialization error when the list cannot be encoded.
    pub fn publish_snapshot(&self, tasks: &[Task]) -> serde_json::Result<()> {
        let message = serde_json::to_string(tasks)?;
        self.publish_raw(message);
        Ok(())
    }

    /// Severs every open subscription, as a dropped connection would.
    pub fn reset(&self) {
        if let Ok(mut state) = self.state.write() {
            let (sender, _) = broadcast::channel(HUB_CAPACITY);
            state.sender = sender;
        }
    }

    /// Makes subsequent connection attempts fail until cleared.
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut state) = self.state.write() {
            state.offline = offline;
        }
    }

    /// Number of currently open subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state
            .read()
            .map(|state| state.sender.receiver_count())
            .unwrap_or(0)
    }
}

impl Default for InMemoryLiveChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LiveChannel for InMemoryLiveChannel {
    async fn connect(&self) -> LiveChannelResult<Box<dyn LiveSubscription>> {
        let state = self.state.read().map_err(lock_error)?;
        if state.offline {
            return Err(LiveChannelError::connect(std::io::Error::other(
                "live channel offline",
            )));
        }
        Ok(Box::new(BroadcastSubscription {
            receiver: state.sender.subscribe(),
        }))
    }
}

struct BroadcastSubscription {
    receiver: broadcast::Receiver<String>,
}

#[async_trait]
impl LiveSubscription for BroadcastSubscription {
    async fn next_message(&mut self) -> Option<LiveChannelResult<String>> {
        match self.receiver.recv().await {
            Ok(message) => Some(Ok(message)),
            Err(broadcast::error::RecvError::Closed) => None,
            Err(err @ broadcast::error::RecvError::Lagged(_)) => {
                Some(Err(LiveChannelError::receive(err)))
            }
        }
    }
}
