//! Capability interfaces through which a drag API reports events.
//!
//! The drag API itself is an external collaborator. It reports drag start
//! and end on a task card through [`DragSource`] and over/leave/drop on a
//! column's drop zone through [`DropTarget`].

use crate::board::domain::{ColumnId, Task};
use crate::drag::domain::{PointerPosition, TaskMove, ZoneBounds};

/// Receives events from a draggable task card.
pub trait DragSource {
    /// A drag started on `task`, picked up from `column`.
    fn begin_drag(&mut self, task: &Task, column: ColumnId);

    /// The drag ended without a drop, or after one.
    fn end_drag(&mut self);
}

/// Receives events from a column's drop zone.
pub trait DropTarget {
    /// The pointer is over the drop zone of `column`.
    fn on_drag_over(&mut self, column: ColumnId);

    /// The pointer left an element inside a drop zone with the given bounds.
    fn on_drag_leave(&mut self, bounds: ZoneBounds, pointer: PointerPosition);

    /// The task was dropped on `column`.
    ///
    /// Returns `true` when `on_move` was invoked.
    fn on_drop<F>(&mut self, column: ColumnId, on_move: F) -> bool
    where
        F: FnOnce(TaskMove);
}
