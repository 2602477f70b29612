//! Application services for the board.

mod draft;
mod manager;

pub use draft::TaskDraft;
pub use manager::BoardManager;
