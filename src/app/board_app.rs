//! Composition root tying the board manager to drag tracking and prompts.

use super::confirm::{ConfirmationPrompt, DELETE_TASK_PROMPT, RESET_BOARD_PROMPT};
use crate::board::{
    domain::{BoardDomainError, BoardState, ColumnId, MoveDirection, TaskId},
    ports::SnapshotStore,
    services::{BoardManager, TaskDraft},
};
use crate::drag::{
    domain::{DragSession, PointerPosition, ZoneBounds},
    ports::{DragSource, DropTarget},
    services::DragTracker,
};
use mockable::Clock;
use tracing::debug;

/// One board session: state manager, drag tracker, add-task draft and the
/// prompt used to confirm destructive actions.
pub struct BoardApp<S, C, P>
where
    S: SnapshotStore,
    C: Clock,
    P: ConfirmationPrompt,
{
    manager: BoardManager<S, C>,
    tracker: DragTracker,
    draft: TaskDraft,
    prompt: P,
}

impl<S, C, P> BoardApp<S, C, P>
where
    S: SnapshotStore,
    C: Clock,
    P: ConfirmationPrompt,
{
    /// Creates a session around an existing manager.
    #[must_use]
    pub fn new(manager: BoardManager<S, C>, prompt: P) -> Self {
        Self {
            manager,
            tracker: DragTracker::new(),
            draft: TaskDraft::new(),
            prompt,
        }
    }

    /// Returns the current board state.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        self.manager.state()
    }

    /// Returns the board manager.
    #[must_use]
    pub const fn manager(&self) -> &BoardManager<S, C> {
        &self.manager
    }

    /// Returns the current drag session.
    #[must_use]
    pub const fn drag_session(&self) -> &DragSession {
        self.tracker.session()
    }

    /// Returns the drag tracker.
    #[must_use]
    pub const fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    /// Returns the add-task draft.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Replaces the draft title.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.set_title(title);
    }

    /// Submits the draft to the board.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the draft title is rejected.
    pub fn submit_draft(&mut self) -> Result<TaskId, BoardDomainError> {
        self.draft.submit(&mut self.manager)
    }

    /// Discards the draft.
    pub fn cancel_draft(&mut self) {
        self.draft.cancel();
    }

    /// Moves a task one column left or right.
    pub fn move_task(
        &mut self,
        task_id: &TaskId,
        column: ColumnId,
        direction: MoveDirection,
    ) -> bool {
        self.manager.move_task_to_adjacent(task_id, column, direction)
    }

    /// Moves a task from `source` straight to `target`.
    pub fn move_task_to(&mut self, task_id: &TaskId, source: ColumnId, target: ColumnId) -> bool {
        self.manager.move_task(task_id, source, target)
    }

    /// Deletes a task after the user confirms.
    ///
    /// Returns `true` when a task was removed.
    pub fn delete_task(&mut self, task_id: &TaskId, column: ColumnId) -> bool {
        if !self.prompt.confirm(DELETE_TASK_PROMPT) {
            debug!(task_id = %task_id, "delete declined");
            return false;
        }
        self.manager.delete_task(task_id, column)
    }

    /// Resets the board after the user confirms.
    ///
    /// Returns `true` when the user accepted.
    pub fn reset_board(&mut self) -> bool {
        if !self.prompt.confirm(RESET_BOARD_PROMPT) {
            debug!("reset declined");
            return false;
        }
        self.manager.reset_board();
        true
    }

    /// Starts dragging the task with `task_id` out of `column`.
    ///
    /// Returns `false` when the column does not hold the task.
    pub fn drag_start(&mut self, task_id: &TaskId, column: ColumnId) -> bool {
        let Some(task) = self.manager.column(column).find(task_id) else {
            debug!(task_id = %task_id, column = %column, "drag start on unknown task");
            return false;
        };
        self.tracker
            .drag_bindings_for(task, column)
            .start(&mut self.tracker);
        true
    }

    /// Records the pointer over the drop zone of `column`.
    pub fn drag_over(&mut self, column: ColumnId) {
        self.tracker.on_drag_over(column);
    }

    /// Records the pointer leaving an element of a drop zone.
    pub fn drag_leave(&mut self, bounds: ZoneBounds, pointer: PointerPosition) {
        self.tracker.on_drag_leave(bounds, pointer);
    }

    /// Drops the dragged task on `column`, moving it when valid.
    ///
    /// Returns `true` when the board changed.
    pub fn drop_on(&mut self, column: ColumnId) -> bool {
        let manager = &mut self.manager;
        let mut moved = false;
        {
            let mut zone = self.tracker.drop_bindings_for(column, |task_move| {
                moved = manager.move_task(&task_move.task_id, task_move.source, task_move.target);
            });
            zone.drop_task(&mut self.tracker);
        }
        moved
    }

    /// Cancels the drag in progress.
    pub fn drag_end(&mut self) {
        self.tracker.end_drag();
    }

    /// Returns `true` when `column` should be highlighted as the drop target.
    #[must_use]
    pub fn is_dragged_over(&self, column: ColumnId) -> bool {
        self.tracker.is_dragged_over(column)
    }
}
