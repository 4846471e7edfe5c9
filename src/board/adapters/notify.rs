//! Notifier adapters.

use std::sync::Mutex;
use tracing::{error, info, warn};

use crate::board::ports::{Notifier, Toast, ToastKind};

/// Notifier that forwards toasts to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success | ToastKind::Info => info!(text = %toast.text, "toast"),
            ToastKind::Warning => warn!(text = %toast.text, "toast"),
            ToastKind::Error => error!(text = %toast.text, "toast"),
        }
    }
}

/// Notifier that records toasts for later inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every toast delivered so far.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|toasts| toasts.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}
