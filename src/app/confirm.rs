//! Confirmation port for destructive board actions.

/// Prompt shown before deleting a task.
pub const DELETE_TASK_PROMPT: &str = "Are you sure you want to delete this task?";

/// Prompt shown before resetting the board.
pub const RESET_BOARD_PROMPT: &str =
    "Are you sure you want to reset the board? This will delete all tasks.";

/// Blocking yes/no prompt presented to the user.
pub trait ConfirmationPrompt {
    /// Shows `message` and returns `true` if the user accepts.
    fn confirm(&self, message: &str) -> bool;
}

/// Prompt that accepts every request, for headless sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmationPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}
