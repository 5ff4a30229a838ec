//! Domain model for the task list core.
//!
//! # Responsibility
//! - Define the canonical task record and the transient edit draft.
//! - Keep model types free of store policy; trimming and validation rules
//!   live in the store.
//!
//! # Invariants
//! - Every stored task is identified by a stable `TaskId`.
//! - A stored task title is never empty after trimming (enforced by the
//!   store, not by construction).

pub mod draft;
pub mod task;
