//! Board state: the three fixed columns keyed by identity.

use super::{Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Complete board state.
///
/// Every task belongs to exactly one column and task identifiers are unique
/// across the board. The canonical empty board is [`BoardState::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    columns: Columns,
}

/// Column map serialized under the `columns` key of a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Columns {
    todo: Column,
    #[serde(rename = "inProgress")]
    in_progress: Column,
    done: Column,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            todo: Column::empty(ColumnId::Todo),
            in_progress: Column::empty(ColumnId::InProgress),
            done: Column::empty(ColumnId::Done),
        }
    }
}

impl BoardState {
    /// Returns the canonical empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the column with the given identity.
    #[must_use]
    pub const fn column(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::Todo => &self.columns.todo,
            ColumnId::InProgress => &self.columns.in_progress,
            ColumnId::Done => &self.columns.done,
        }
    }

    pub(crate) const fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::Todo => &mut self.columns.todo,
            ColumnId::InProgress => &mut self.columns.in_progress,
            ColumnId::Done => &mut self.columns.done,
        }
    }

    /// Iterates over the columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        ColumnId::ALL.into_iter().map(|id| self.column(id))
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns().map(Column::len).sum()
    }

    /// Returns `true` when no column holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns().all(Column::is_empty)
    }

    /// Locates a task anywhere on the board.
    #[must_use]
    pub fn find_task(&self, task_id: &TaskId) -> Option<(ColumnId, &Task)> {
        self.columns()
            .find_map(|column| column.find(task_id).map(|task| (column.id(), task)))
    }

    /// Iterates over every task with its column, in display order.
    pub fn tasks(&self) -> impl Iterator<Item = (ColumnId, &Task)> {
        self.columns()
            .flat_map(|column| column.tasks().iter().map(move |task| (column.id(), task)))
    }
}
