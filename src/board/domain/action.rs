//! Board actions and the pure transition function that applies them.

use super::{BoardState, ColumnId, Task, TaskId};
use mockable::Clock;

/// Closed set of board state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Append a new task to the `todo` column.
    AddTask {
        /// Raw title; trimmed before use.
        title: String,
    },
    /// Move a task from one column to the tail of another.
    MoveTask {
        /// Task to move.
        task_id: TaskId,
        /// Column currently holding the task.
        source: ColumnId,
        /// Destination column.
        target: ColumnId,
    },
    /// Remove a task from a column.
    DeleteTask {
        /// Task to remove.
        task_id: TaskId,
        /// Column holding the task.
        column: ColumnId,
    },
    /// Replace the whole board with a previously saved snapshot.
    LoadState(BoardState),
    /// Discard every task.
    ResetBoard,
}

impl BoardAction {
    /// Returns a short label for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "add_task",
            Self::MoveTask { .. } => "move_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::LoadState(_) => "load_state",
            Self::ResetBoard => "reset_board",
        }
    }
}

/// Applies an action to a board state, returning the resulting state.
///
/// The function performs no I/O. Actions that cannot apply (an empty title, a
/// same-column move, a task missing from the named column) yield a state equal
/// to the input.
#[must_use]
pub fn reduce(state: &BoardState, action: BoardAction, clock: &impl Clock) -> BoardState {
    match action {
        BoardAction::AddTask { title } => add_task(state, &title, clock),
        BoardAction::MoveTask {
            task_id,
            source,
            target,
        } => move_task(state, &task_id, source, target, clock),
        BoardAction::DeleteTask { task_id, column } => delete_task(state, &task_id, column),
        BoardAction::LoadState(snapshot) => snapshot,
        BoardAction::ResetBoard => BoardState::default(),
    }
}

fn add_task(state: &BoardState, title: &str, clock: &impl Clock) -> BoardState {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return state.clone();
    }

    let mut next = state.clone();
    next.column_mut(ColumnId::Todo).push(Task::new(trimmed, clock));
    next
}

fn move_task(
    state: &BoardState,
    task_id: &TaskId,
    source: ColumnId,
    target: ColumnId,
    clock: &impl Clock,
) -> BoardState {
    if source == target || !state.column(source).contains(task_id) {
        return state.clone();
    }

    let mut next = state.clone();
    if let Some(task) = next.column_mut(source).take(task_id) {
        next.column_mut(target).push(task.touched(clock));
    }
    next
}

fn delete_task(state: &BoardState, task_id: &TaskId, column: ColumnId) -> BoardState {
    let mut next = state.clone();
    // Absent tasks leave the column untouched.
    let _removed = next.column_mut(column).take(task_id);
    next
}
