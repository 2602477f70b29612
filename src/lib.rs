//! FlowBoard: kanban task board core.
//!
//! This crate provides the behaviour behind a three-column kanban board:
//! creating tasks, moving them between To Do, In Progress and Done by
//! drag-and-drop or directional moves, deleting them, and resetting the board.
//! The board persists itself as a JSON snapshot in key-value storage.
//!
//! # Architecture
//!
//! FlowBoard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board state and transition logic with no I/O
//! - **Ports**: Abstract trait interfaces for storage and drag events
//! - **Adapters**: Concrete snapshot stores (in-memory, directory-backed)
//!
//! # Modules
//!
//! - [`board`]: Board state, transitions, persistence and the add-task draft
//! - [`drag`]: Drag-and-drop session tracking
//! - [`app`]: Composition root wiring both for one board session

pub mod app;
pub mod board;
pub mod drag;
