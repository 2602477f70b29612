//! Unit tests for drag tracking.
