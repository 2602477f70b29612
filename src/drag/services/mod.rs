//! Drag tracking services.

mod bindings;
mod tracker;

pub use bindings::{DragHandle, DropZone, EFFECT_ALLOWED, TRANSFER_FORMAT};
pub use tracker::DragTracker;
