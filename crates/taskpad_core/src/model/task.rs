//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record held by the store.
//!
//! # Invariants
//! - `id` is stable for the task's lifetime and never reused.
//! - Field text is stored trimmed; the store owns the trimming and the
//!   non-empty-title rule before a task is ever constructed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// One to-do record: a short headline plus an optional longer body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID assigned at creation, never reassigned.
    pub id: TaskId,
    /// Non-empty trimmed headline text.
    pub title: String,
    /// Trimmed body text; may be empty.
    pub description: String,
}

impl Task {
    /// Creates a task with a generated stable ID.
    ///
    /// The only identity contract is uniqueness within the collection
    /// lifetime; UUIDv4 satisfies it without any coordination.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
        }
    }
}
