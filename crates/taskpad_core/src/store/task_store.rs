//! In-memory task store.
//!
//! # Responsibility
//! - Own the ordered task collection and the transient edit draft.
//! - Expose the five mutating operations as the only mutation surface.
//!
//! # Invariants
//! - Task ids are unique within the collection lifetime.
//! - A stored title is never empty after trimming; offending commits are
//!   no-ops that leave all state untouched.
//! - `draft.editing_id`, when set, references a task currently in the
//!   collection; deleting that task resets the draft.
//! - Invalid calls never error. "Failure" is always "no observable state
//!   change" plus a debug-level diagnostic event.

use crate::model::draft::Draft;
use crate::model::task::{Task, TaskId};
use log::{debug, info};

/// Owner of the task collection and the edit draft.
///
/// Presentation layers read `tasks()`/`draft()` snapshots, decide which
/// affordance to show from `draft().is_editing()`, and forward every user
/// intent through the operations below. They never mutate state directly.
///
/// Single-threaded by design: `&mut self` mutation makes a partially
/// applied operation unobservable without any locking.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    draft: Draft,
}

impl TaskStore {
    /// Creates an empty store in composing mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered snapshot of the collection (insertion order).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current edit-buffer snapshot.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Looks up one task by stable ID.
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Assigns the draft title verbatim. Trimming happens on commit.
    pub fn set_draft_title(&mut self, text: impl Into<String>) {
        self.draft.title = text.into();
    }

    /// Assigns the draft description verbatim. Trimming happens on commit.
    pub fn set_draft_description(&mut self, text: impl Into<String>) {
        self.draft.description = text.into();
    }

    /// Commits the draft as a new task appended to the collection.
    ///
    /// No-ops, leaving the draft untouched, when the trimmed title is empty
    /// (the user keeps their typed text and can correct it) or when an edit
    /// session is active (`update_task` owns that path; add and update are
    /// mutually exclusive by design).
    pub fn add_task(&mut self) {
        if self.draft.is_editing() {
            debug!("event=add_task module=store status=noop reason=editing_active");
            return;
        }
        let title = self.draft.title.trim();
        if title.is_empty() {
            debug!("event=add_task module=store status=noop reason=empty_title");
            return;
        }

        let task = Task::new(title, self.draft.description.trim());
        let id = task.id;
        self.tasks.push(task);
        self.draft.reset();
        info!(
            "event=task_added module=store status=ok id={id} total={}",
            self.tasks.len()
        );
    }

    /// Begins an edit session for `id`, copying that task's current fields
    /// into the draft.
    ///
    /// Unknown ids are ignored. Re-entry, with the same id or another one,
    /// re-copies and discards any unsaved draft edits: last start-edit
    /// wins, no merge.
    pub fn start_editing(&mut self, id: TaskId) {
        let Some(task) = self.tasks.iter().find(|task| task.id == id) else {
            debug!("event=start_editing module=store status=noop reason=unknown_id id={id}");
            return;
        };
        self.draft.load(task);
        info!("event=edit_started module=store status=ok id={id}");
    }

    /// Commits the draft back onto the task under edit, in place.
    ///
    /// An empty-after-trim title is a no-op that keeps the edit session
    /// open: an empty title is never accepted, and the user stays mid-edit
    /// to correct it. No-ops when composing. Identity and position of the
    /// target never change; the collection length never changes.
    pub fn update_task(&mut self) {
        let Some(id) = self.draft.editing_id else {
            debug!("event=update_task module=store status=noop reason=not_editing");
            return;
        };
        let title = self.draft.title.trim();
        if title.is_empty() {
            debug!("event=update_task module=store status=noop reason=empty_title id={id}");
            return;
        }
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            // Unreachable while delete_task resets the draft; kept so a
            // dangling edit target can never fabricate or revive a task.
            debug!("event=update_task module=store status=noop reason=unknown_id id={id}");
            return;
        };

        task.title = title.to_string();
        task.description = self.draft.description.trim().to_string();
        self.draft.reset();
        info!("event=task_updated module=store status=ok id={id}");
    }

    /// Removes the task with `id`, if present.
    ///
    /// Deleting the task currently under edit also resets the draft, since
    /// the edit target no longer exists. Never errors.
    pub fn delete_task(&mut self, id: TaskId) {
        let Some(position) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=delete_task module=store status=noop reason=unknown_id id={id}");
            return;
        };

        self.tasks.remove(position);
        if self.draft.editing_id == Some(id) {
            self.draft.reset();
        }
        info!(
            "event=task_deleted module=store status=ok id={id} total={}",
            self.tasks.len()
        );
    }

    /// Abandons any edit session and clears the draft unconditionally.
    /// Never touches `tasks`.
    pub fn cancel_editing(&mut self) {
        self.draft.reset();
        debug!("event=edit_cancelled module=store status=ok");
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use uuid::Uuid;

    #[test]
    fn draft_setters_store_text_verbatim() {
        let mut store = TaskStore::new();
        store.set_draft_title("  spaced out  ");
        store.set_draft_description("\ttabbed\t");

        assert_eq!(store.draft().title, "  spaced out  ");
        assert_eq!(store.draft().description, "\ttabbed\t");
    }

    #[test]
    fn get_task_finds_by_id_and_misses_unknown() {
        let mut store = TaskStore::new();
        store.set_draft_title("find me");
        store.add_task();
        let id = store.tasks()[0].id;

        assert_eq!(store.get_task(id).map(|task| task.title.as_str()), Some("find me"));
        assert!(store.get_task(Uuid::new_v4()).is_none());
    }
}
