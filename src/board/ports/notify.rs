//! Notification port for transient user-facing messages.
//!
//! Failures and confirmations surface as short-lived toasts, never as
//! blocking dialogs. The port is object-safe so services can share one
//! notifier without threading another type parameter.

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
    /// Neutral information.
    Info,
    /// Something needs the user's attention.
    Warning,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Severity.
    pub kind: ToastKind,
    /// Message text.
    pub text: String,
}

/// Sink for transient notifications.
pub trait Notifier: Send + Sync {
    /// Delivers one notification.
    fn notify(&self, toast: Toast);

    /// Delivers a success notification.
    fn success(&self, text: &str) {
        self.notify(Toast {
            kind: ToastKind::Success,
            text: text.to_owned(),
        });
    }

    /// Delivers an error notification.
    fn error(&self, text: &str) {
        self.notify(Toast {
            kind: ToastKind::Error,
            text: text.to_owned(),
        });
    }

    /// Delivers an informational notification.
    fn info(&self, text: &str) {
        self.notify(Toast {
            kind: ToastKind::Info,
            text: text.to_owned(),
        });
    }

    /// Delivers a warning notification.
    fn warning(&self, text: &str) {
        self.notify(Toast {
            kind: ToastKind::Warning,
            text: text.to_owned(),
        });
    }
}
