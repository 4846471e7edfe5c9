//! Projection of the task list into board columns.

use crate::board::domain::{Task, TaskStatus};

/// Board column order, first column leftmost.
pub const BOARD_COLUMNS: [TaskStatus; 5] = [
    TaskStatus::Pending,
    TaskStatus::InProgress,
    TaskStatus::OnHold,
    TaskStatus::Completed,
    TaskStatus::Cancelled,
];

/// One status bucket of the board.
#[derive(Debug)]
pub struct BoardColumn<'a> {
    status: TaskStatus,
    tasks: Vec<&'a Task>,
}

impl<'a> BoardColumn<'a> {
    /// The status shared by every task in this column.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Tasks grouped into this column, in task-list order.
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }
}

/// The full board: one bucket per known status, in [`BOARD_COLUMNS`] order.
///
/// Projection only groups references; tasks are never mutated or dropped.
/// A task whose status matches no column lands in the first (Pending)
/// bucket as a recovery default. Recompute whenever the task list changes.
#[derive(Debug)]
pub struct BoardProjection<'a> {
    columns: Vec<BoardColumn<'a>>,
}

impl<'a> BoardProjection<'a> {
    /// Buckets the given tasks into board columns.
    #[must_use]
    pub fn project(tasks: &'a [Task]) -> Self {
        let mut columns: Vec<BoardColumn<'a>> = BOARD_COLUMNS
            .iter()
            .map(|status| BoardColumn {
                status: *status,
                tasks: Vec::new(),
            })
            .collect();

        for task in tasks {
            let index = BOARD_COLUMNS
                .iter()
                .position(|status| *status == task.status)
                .unwrap_or(0);
            if let Some(column) = columns.get_mut(index) {
                column.tasks.push(task);
            }
        }

        Self { columns }
    }

    /// All columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn<'a>] {
        &self.columns
    }

    /// The column for one status, if it is a known board column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&BoardColumn<'a>> {
        self.columns.iter().find(|column| column.status == status)
    }
}
