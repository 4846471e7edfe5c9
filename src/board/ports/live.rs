//! Live channel port: server-pushed full-list snapshots.
//!
//! The backend pushes the entire task list as one message whenever it
//! changes; there is no delta protocol. The port models a restartable,
//! non-rewindable subscription: [`LiveChannel::connect`] opens a fresh
//! subscription, and a subscription yields raw messages until the
//! connection is lost. Reconnect policy lives with the consumer.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for live channel operations.
pub type LiveChannelResult<T> = Result<T, LiveChannelError>;

/// A source of live snapshot subscriptions.
#[async_trait]
pub trait LiveChannel: Send + Sync {
    /// Opens a new subscription to the snapshot stream.
    ///
    /// # Errors
    ///
    /// Returns [`LiveChannelError::Connect`] when the channel cannot be
    /// opened; the caller decides whether and when to retry.
    async fn connect(&self) -> LiveChannelResult<Box<dyn LiveSubscription>>;
}

/// One open subscription to the snapshot stream.
#[async_trait]
pub trait LiveSubscription: Send {
    /// Waits for the next raw message.
    ///
    /// Returns `None` once the connection has closed. An `Err` item signals
    /// a receive failure; the subscription should be abandoned afterwards.
    async fn next_message(&mut self) -> Option<LiveChannelResult<String>>;
}

/// Errors returned by live channel implementations.
#[derive(Debug, Clone, Error)]
pub enum LiveChannelError {
    /// Opening the subscription failed.
    #[error("failed to open live channel: {0}")]
    Connect(Arc<dyn std::error::Error + Send + Sync>),

    /// Receiving on an open subscription failed.
    #[error("live channel receive failed: {0}")]
    Receive(Arc<dyn std::error::Error + Send + Sync>),
}

impl LiveChannelError {
    /// Wraps a connect-time error.
    pub fn connect(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Connect(Arc::new(err))
    }

    /// Wraps a receive-time error.
    pub fn receive(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Receive(Arc::new(err))
    }
}
