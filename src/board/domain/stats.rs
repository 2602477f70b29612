//! Task counts for column headers and the board summary.

use super::{BoardState, Column, ColumnId};
use chrono::{DateTime, TimeDelta, Utc};

/// Per-column task counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnStats {
    /// Number of tasks in the column.
    pub total: usize,
    /// Number of tasks created within the recent window.
    pub recent: usize,
}

impl ColumnStats {
    /// Counts the tasks in `column`, treating tasks created after
    /// `now - window` as recent.
    #[must_use]
    pub fn for_column(column: &Column, now: DateTime<Utc>, window: TimeDelta) -> Self {
        let recent = now.checked_sub_signed(window).map_or(column.len(), |cutoff| {
            column
                .tasks()
                .iter()
                .filter(|task| task.created_at() > cutoff)
                .count()
        });

        Self {
            total: column.len(),
            recent,
        }
    }
}

/// Board-wide task counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardStats {
    /// Tasks across all columns.
    pub total: usize,
    /// Tasks in `todo`.
    pub todo: usize,
    /// Tasks in `inProgress`.
    pub in_progress: usize,
    /// Tasks in `done`.
    pub done: usize,
}

impl BoardStats {
    /// Counts the tasks on a board.
    #[must_use]
    pub fn for_board(state: &BoardState) -> Self {
        let todo = state.column(ColumnId::Todo).len();
        let in_progress = state.column(ColumnId::InProgress).len();
        let done = state.column(ColumnId::Done).len();
        Self {
            total: state.total_tasks(),
            todo,
            in_progress,
            done,
        }
    }

    /// Returns the count for a single column.
    #[must_use]
    pub const fn count(&self, column: ColumnId) -> usize {
        match column {
            ColumnId::Todo => self.todo,
            ColumnId::InProgress => self.in_progress,
            ColumnId::Done => self.done,
        }
    }
}
