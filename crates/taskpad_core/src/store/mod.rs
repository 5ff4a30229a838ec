//! Task-collection state machine.
//!
//! # Responsibility
//! - Own all task-list mutation behind a single store object, so the
//!   invariants live in one place instead of scattered UI handlers.

pub mod task_store;
