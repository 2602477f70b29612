//! Per-card and per-column event bindings.

use crate::board::domain::{ColumnId, Task};
use crate::drag::{
    domain::{PointerPosition, TaskMove, ZoneBounds},
    ports::{DragSource, DropTarget},
};
use tracing::debug;

/// Data format of the drag transfer payload.
pub const TRANSFER_FORMAT: &str = "text/plain";

/// Drop effect a task card allows.
pub const EFFECT_ALLOWED: &str = "move";

/// Drag binding for one task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragHandle {
    task: Task,
    column: ColumnId,
    effect_allowed: &'static str,
}

impl DragHandle {
    /// Creates a binding for `task` sitting in `column`.
    #[must_use]
    pub const fn new(task: Task, column: ColumnId) -> Self {
        Self {
            task,
            column,
            effect_allowed: EFFECT_ALLOWED,
        }
    }

    /// Returns the bound task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the column the card sits in.
    #[must_use]
    pub const fn column(&self) -> ColumnId {
        self.column
    }

    /// Returns the transfer payload: the task identifier as plain text.
    #[must_use]
    pub fn transfer_data(&self) -> (&'static str, &str) {
        (TRANSFER_FORMAT, self.task.id().as_str())
    }

    /// Returns the drop effect the card allows.
    #[must_use]
    pub const fn effect_allowed(&self) -> &'static str {
        self.effect_allowed
    }

    /// Reports a drag start on the card.
    pub fn start(&self, source: &mut impl DragSource) {
        source.begin_drag(&self.task, self.column);
    }

    /// Reports a drag end on the card.
    pub fn finish(&self, source: &mut impl DragSource) {
        debug!(task_id = %self.task.id(), column = %self.column, "drag handle released");
        source.end_drag();
    }
}

/// Drop binding for one column, carrying the move callback.
pub struct DropZone<F>
where
    F: FnMut(TaskMove),
{
    column: ColumnId,
    on_move: F,
}

impl<F> DropZone<F>
where
    F: FnMut(TaskMove),
{
    /// Creates a binding for `column`.
    #[must_use]
    pub const fn new(column: ColumnId, on_move: F) -> Self {
        Self { column, on_move }
    }

    /// Returns the bound column.
    #[must_use]
    pub const fn column(&self) -> ColumnId {
        self.column
    }

    /// Reports the pointer moving over the zone.
    pub fn drag_over(&self, target: &mut impl DropTarget) {
        target.on_drag_over(self.column);
    }

    /// Reports the pointer leaving an element of the zone.
    pub fn drag_leave(
        &self,
        target: &mut impl DropTarget,
        bounds: ZoneBounds,
        pointer: PointerPosition,
    ) {
        target.on_drag_leave(bounds, pointer);
    }

    /// Reports a drop on the zone. Returns `true` when a move was issued.
    pub fn drop_task(&mut self, target: &mut impl DropTarget) -> bool {
        target.on_drop(self.column, &mut self.on_move)
    }
}
