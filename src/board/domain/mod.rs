//! Domain model for the kanban board.
//!
//! The board domain models tasks, the three fixed columns, and the pure
//! transition function over board state, keeping persistence and interaction
//! concerns outside of the domain boundary.

mod action;
mod column;
mod error;
mod format;
mod ids;
pub mod snapshot;
mod state;
mod stats;
mod task;
mod title;

pub use action::{BoardAction, reduce};
pub use column::Column;
pub use error::{BoardDomainError, ParseColumnIdError};
pub use format::{format_timestamp, truncate_text};
pub use ids::{ColumnId, MoveDirection, TaskId};
pub use snapshot::SnapshotError;
pub use state::BoardState;
pub use stats::{BoardStats, ColumnStats};
pub use task::{PersistedTaskData, Task};
pub use title::{MAX_TITLE_LENGTH, TaskTitle};
