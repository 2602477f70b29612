//! Drag-and-drop interaction tracking.
//!
//! A [`services::DragTracker`] follows one drag gesture at a time from pickup
//! to drop or cancel and turns a valid drop into a [`domain::TaskMove`]. It
//! never touches the board itself; the caller applies the move.

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
