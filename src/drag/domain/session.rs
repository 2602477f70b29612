//! Drag session state.

use crate::board::domain::{ColumnId, Task, TaskId};

/// Transient state of a drag gesture.
///
/// Sessions are never persisted and return to [`DragSession::Idle`] on every
/// terminal event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging {
        /// Task picked up at drag start.
        task: Task,
        /// Column the task was picked up from.
        source: ColumnId,
        /// Column currently under the pointer, if it is inside a drop zone.
        target: Option<ColumnId>,
    },
}

impl DragSession {
    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns the dragged task, if any.
    #[must_use]
    pub const fn task(&self) -> Option<&Task> {
        match self {
            Self::Idle => None,
            Self::Dragging { task, .. } => Some(task),
        }
    }

    /// Returns the column the drag started from, if any.
    #[must_use]
    pub const fn source_column(&self) -> Option<ColumnId> {
        match self {
            Self::Idle => None,
            Self::Dragging { source, .. } => Some(*source),
        }
    }

    /// Returns the candidate drop column, if any.
    #[must_use]
    pub const fn target_column(&self) -> Option<ColumnId> {
        match self {
            Self::Idle => None,
            Self::Dragging { target, .. } => *target,
        }
    }
}

/// A committed move produced by a completed drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMove {
    /// Task being moved.
    pub task_id: TaskId,
    /// Column the task leaves.
    pub source: ColumnId,
    /// Column the task joins.
    pub target: ColumnId,
}
