//! Parse errors for task board domain values.

use thiserror::Error;

/// Error returned while strictly parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while strictly parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while strictly parsing a module tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown module type: {0}")]
pub struct ParseModuleTypeError(pub String);
