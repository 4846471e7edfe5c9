//! Adapter implementations of the board ports.

pub mod memory;
mod notify;

pub use notify::{RecordingNotifier, TracingNotifier};
