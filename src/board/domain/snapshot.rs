//! JSON codec for persisted board snapshots.
//!
//! The snapshot layout is
//!
//! ```json
//! { "columns": {
//!     "todo":       { "id": "todo",       "title": "To Do",       "tasks": [] },
//!     "inProgress": { "id": "inProgress", "title": "In Progress", "tasks": [] },
//!     "done":       { "id": "done",       "title": "Done",        "tasks": [] }
//! }}
//! ```
//!
//! Task timestamps are RFC 3339 strings and are reparsed on decode.

use super::{BoardState, ColumnId, TaskId};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while encoding or decoding a board snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot is not valid JSON or does not match the board layout.
    #[error("malformed board snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A column entry carries an identity other than the key it is stored
    /// under.
    #[error("column stored under '{expected}' has id '{found}'")]
    ColumnMismatch {
        /// Key the column was stored under.
        expected: ColumnId,
        /// Identity recorded in the column itself.
        found: ColumnId,
    },

    /// A column carries a title other than its canonical one.
    #[error("column '{column}' has title '{found}'")]
    ColumnTitleMismatch {
        /// Column whose title was altered.
        column: ColumnId,
        /// Title recorded in the snapshot.
        found: String,
    },

    /// A task has an empty identifier.
    #[error("task in column '{0}' has an empty identifier")]
    EmptyTaskId(ColumnId),

    /// A task title is blank after trimming.
    #[error("task '{0}' has a blank title")]
    BlankTaskTitle(TaskId),

    /// The same task identifier appears more than once on the board.
    #[error("duplicate task identifier in snapshot: {0}")]
    DuplicateTask(TaskId),
}

/// Serializes a board state to its JSON snapshot.
///
/// # Errors
///
/// Returns [`SnapshotError::Malformed`] if serialization fails.
pub fn encode(state: &BoardState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(state)?)
}

/// Parses a JSON snapshot into a board state.
///
/// # Errors
///
/// Returns [`SnapshotError::Malformed`] for invalid JSON or an unexpected
/// shape, [`SnapshotError::ColumnMismatch`] when a column is filed under the
/// wrong key, [`SnapshotError::ColumnTitleMismatch`] when a column title was
/// altered, [`SnapshotError::EmptyTaskId`] or [`SnapshotError::BlankTaskTitle`]
/// for an invalid task, and [`SnapshotError::DuplicateTask`] when a task
/// identifier repeats.
pub fn decode(raw: &str) -> Result<BoardState, SnapshotError> {
    let state: BoardState = serde_json::from_str(raw)?;
    check_invariants(&state)?;
    Ok(state)
}

fn check_invariants(state: &BoardState) -> Result<(), SnapshotError> {
    for expected in ColumnId::ALL {
        let column = state.column(expected);
        let found = column.id();
        if found != expected {
            return Err(SnapshotError::ColumnMismatch { expected, found });
        }
        if column.title() != expected.title() {
            return Err(SnapshotError::ColumnTitleMismatch {
                column: expected,
                found: column.title().to_owned(),
            });
        }
    }

    let mut seen = HashSet::new();
    for (column, task) in state.tasks() {
        if task.id().as_str().is_empty() {
            return Err(SnapshotError::EmptyTaskId(column));
        }
        if task.title().trim().is_empty() {
            return Err(SnapshotError::BlankTaskTitle(task.id().clone()));
        }
        if !seen.insert(task.id()) {
            return Err(SnapshotError::DuplicateTask(task.id().clone()));
        }
    }
    Ok(())
}
