//! Step definitions for kanban board BDD scenarios.

pub mod given;
pub mod then;
pub mod world;
