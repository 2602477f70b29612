//! Drag interaction tracker: `Idle -> Dragging -> Idle`.

use crate::board::domain::{ColumnId, Task};
use crate::drag::{
    domain::{DragSession, PointerPosition, TaskMove, ZoneBounds},
    ports::{DragSource, DropTarget},
    services::{DragHandle, DropZone},
};
use std::mem;
use tracing::debug;

/// Owns the transient drag session for one board.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    session: DragSession,
}

impl DragTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current drag session.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Starts dragging `task` from `source`, replacing any earlier session.
    pub fn begin(&mut self, task: Task, source: ColumnId) {
        debug!(task_id = %task.id(), source = %source, "drag started");
        self.session = DragSession::Dragging {
            task,
            source,
            target: None,
        };
    }

    /// Records `column` as the candidate drop target. Last write wins.
    pub fn update_target(&mut self, column: ColumnId) {
        if let DragSession::Dragging { target, .. } = &mut self.session {
            *target = Some(column);
        }
    }

    /// Clears the candidate target if the pointer has left `bounds`.
    ///
    /// `bounds` are those of the zone the leave event fired on. A pointer
    /// still inside them has only crossed into a child element.
    pub fn clear_target(&mut self, bounds: ZoneBounds, pointer: PointerPosition) {
        if bounds.contains(pointer) {
            return;
        }
        if let DragSession::Dragging { target, .. } = &mut self.session {
            *target = None;
        }
    }

    /// Finishes the drag, invoking `on_move` when the candidate target
    /// differs from the source.
    ///
    /// The tracker is idle afterwards in every case. Returns `true` when
    /// `on_move` was invoked.
    pub fn complete<F>(&mut self, on_move: F) -> bool
    where
        F: FnOnce(TaskMove),
    {
        let DragSession::Dragging {
            task,
            source,
            target: Some(target),
        } = mem::take(&mut self.session)
        else {
            debug!("drag completed without a drop target");
            return false;
        };

        if target == source {
            debug!(task_id = %task.id(), column = %source, "drag dropped on its source column");
            return false;
        }

        debug!(task_id = %task.id(), source = %source, target = %target, "drag completed");
        on_move(TaskMove {
            task_id: task.id().clone(),
            source,
            target,
        });
        true
    }

    /// Abandons the drag without moving anything.
    pub fn end(&mut self) {
        if self.session.is_active() {
            debug!("drag cancelled");
        }
        self.session = DragSession::Idle;
    }

    /// Returns `true` when a drop on `column` would move the dragged task.
    #[must_use]
    pub fn is_valid_target(&self, column: ColumnId) -> bool {
        self.session.is_active()
            && self
                .session
                .source_column()
                .is_some_and(|source| source != column)
    }

    /// Returns `true` when the pointer is over `column` and `column` is a
    /// valid target.
    #[must_use]
    pub fn is_dragged_over(&self, column: ColumnId) -> bool {
        self.session.target_column() == Some(column) && self.is_valid_target(column)
    }

    /// Returns the drag binding for a task card.
    #[must_use]
    pub fn drag_bindings_for(&self, task: &Task, column: ColumnId) -> DragHandle {
        DragHandle::new(task.clone(), column)
    }

    /// Returns the drop binding for a column, dispatching moves to `on_move`.
    #[must_use]
    pub fn drop_bindings_for<F>(&self, column: ColumnId, on_move: F) -> DropZone<F>
    where
        F: FnMut(TaskMove),
    {
        DropZone::new(column, on_move)
    }
}

impl DragSource for DragTracker {
    fn begin_drag(&mut self, task: &Task, column: ColumnId) {
        self.begin(task.clone(), column);
    }

    fn end_drag(&mut self) {
        self.end();
    }
}

impl DropTarget for DragTracker {
    fn on_drag_over(&mut self, column: ColumnId) {
        self.update_target(column);
    }

    fn on_drag_leave(&mut self, bounds: ZoneBounds, pointer: PointerPosition) {
        self.clear_target(bounds, pointer);
    }

    fn on_drop<F>(&mut self, column: ColumnId, on_move: F) -> bool
    where
        F: FnOnce(TaskMove),
    {
        self.update_target(column);
        self.complete(on_move)
    }
}
