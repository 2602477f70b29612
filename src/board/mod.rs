//! Kanban board state management.
//!
//! The board holds three fixed columns (`todo`, `inProgress`, `done`) and
//! persists itself as a JSON snapshot after every change. The module follows
//! hexagonal architecture:
//!
//! - Domain types and the pure transition function in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
