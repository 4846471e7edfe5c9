//! The task board: synchronization, projection, and drag transitions.
//!
//! The board keeps an authoritative in-memory task list fed by the remote
//! store and the live snapshot channel, projects it into status columns,
//! resolves assignee display fields against the employee directory, and
//! drives the two-phase drag-and-drop status transition commit. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
