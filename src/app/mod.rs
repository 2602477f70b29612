//! Board session wiring.
//!
//! [`BoardApp`] is the composition root for one board: it owns the state
//! manager and the drag tracker, routes UI events between them, and asks a
//! [`ConfirmationPrompt`] before deleting a task or resetting the board.

mod board_app;
mod confirm;

pub use board_app::BoardApp;
pub use confirm::{AutoConfirm, ConfirmationPrompt, DELETE_TASK_PROMPT, RESET_BOARD_PROMPT};

#[cfg(test)]
mod tests;
