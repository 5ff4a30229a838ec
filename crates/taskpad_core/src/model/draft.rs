//! Edit-buffer model for the task form.
//!
//! # Responsibility
//! - Represent the transient form state: composing a new task, or editing
//!   exactly one existing task.
//!
//! # Invariants
//! - `editing_id`, when set, references a task currently in the store; the
//!   store resets the draft the moment that task is deleted, so a dangling
//!   edit target is never observable.

use crate::model::task::{Task, TaskId};

/// Transient form buffer backing the title/description inputs.
///
/// `editing_id = None` is composing mode (the form offers "add");
/// `Some(id)` is editing mode (the form offers "update" and "cancel").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    /// Raw title text as typed; trimmed only on commit.
    pub title: String,
    /// Raw description text as typed; trimmed only on commit.
    pub description: String,
    /// Edit target, or `None` when composing a new task.
    pub editing_id: Option<TaskId>,
}

impl Draft {
    /// Returns whether an edit session is active.
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Clears both fields and returns to composing mode.
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.editing_id = None;
    }

    /// Copies a task's current fields in and targets it for editing.
    ///
    /// Overwrites whatever was typed before: last start-edit wins, no merge.
    pub fn load(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.description = task.description.clone();
        self.editing_id = Some(task.id);
    }
}
