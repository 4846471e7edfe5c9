//! Employee reference data consumed by the task board.
//!
//! The directory is owned and mutated by a separate back-office module;
//! the board only reads it to resolve assignee display fields.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::InMemoryEmployeeRepository;
pub use domain::{Employee, EmployeeId};
pub use ports::{DirectoryError, DirectoryResult, EmployeeRepository};
