//! Add-task draft: form-local input state ahead of `add_task`.

use crate::board::{
    domain::{BoardDomainError, TaskId, TaskTitle},
    ports::SnapshotStore,
    services::BoardManager,
};
use mockable::Clock;

/// Pending title input for a new task.
///
/// The draft validates the title before anything reaches the board, so an
/// invalid title is reported here and never committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    error: Option<BoardDomainError>,
    submitting: bool,
}

impl TaskDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the validation error from the last submit, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&BoardDomainError> {
        self.error.as_ref()
    }

    /// Returns `true` while a submit is being applied.
    ///
    /// `submit` is synchronous and clears the flag before returning, so
    /// callers always observe `false` between calls.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replaces the title text, clearing any earlier validation error.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.error = None;
    }

    /// Validates the title and adds it to the board.
    ///
    /// On success the draft is cleared and the new task's identifier is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns the [`BoardDomainError`] describing why the title was
    /// rejected; the same error is kept on the draft and the board is left
    /// unchanged.
    pub fn submit<S, C>(
        &mut self,
        manager: &mut BoardManager<S, C>,
    ) -> Result<TaskId, BoardDomainError>
    where
        S: SnapshotStore,
        C: Clock,
    {
        let title = match TaskTitle::with_limit(&self.title, manager.config().max_title_length) {
            Ok(title) => title,
            Err(err) => {
                self.error = Some(err.clone());
                return Err(err);
            }
        };

        self.submitting = true;
        self.error = None;
        let added = manager.add_task(title.as_str());
        self.submitting = false;

        // A validated title is never empty, so the manager always adds it.
        let task_id = added.ok_or(BoardDomainError::EmptyTitle)?;
        self.title.clear();
        Ok(task_id)
    }

    /// Discards the pending title and any validation error.
    pub fn cancel(&mut self) {
        self.title.clear();
        self.error = None;
    }
}
