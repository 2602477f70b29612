//! Domain model for drag-and-drop interaction.

mod geometry;
mod session;

pub use geometry::{PointerPosition, ZoneBounds};
pub use session::{DragSession, TaskMove};
