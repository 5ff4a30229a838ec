//! Interactive task list front-end.
//!
//! # Responsibility
//! - Render store snapshots after every command and show the affordance
//!   matching the draft mode (add vs update/cancel).
//! - Forward user intents into `taskpad_core::TaskStore`; never mutate
//!   task state except through the store's operations.

use std::io::{self, BufRead, Write};
use taskpad_core::{core_version, default_log_level, init_logging, TaskId, TaskStore};

const HELP: &str = "commands:
  title <text>   set the form title
  desc <text>    set the form description
  add            append the form as a new task (composing mode)
  edit <n>       start editing task at position n
  update         commit the form onto the task under edit
  cancel         abandon the edit and clear the form
  delete <n>     remove task at position n
  help           show this text
  quit           exit";

fn main() {
    init_best_effort_logging();
    log::info!("event=cli_start module=cli status=ok version={}", core_version());
    println!("taskpad {} (core ping={})", core_version(), taskpad_core::ping());
    println!("type `help` for commands");

    let mut store = TaskStore::new();
    let stdin = io::stdin();
    render(&store);

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        if !dispatch(&mut store, line.trim()) {
            break;
        }
        render(&store);
    }
}

/// Routes one input line into the store. Returns `false` on quit.
fn dispatch(store: &mut TaskStore, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "title" => store.set_draft_title(rest),
        "desc" => store.set_draft_description(rest),
        "add" => store.add_task(),
        "update" => store.update_task(),
        "cancel" => store.cancel_editing(),
        "edit" => match task_at(store, rest) {
            Some(id) => store.start_editing(id),
            None => println!("no task at position `{rest}`"),
        },
        "delete" => match task_at(store, rest) {
            Some(id) => store.delete_task(id),
            None => println!("no task at position `{rest}`"),
        },
        "help" => println!("{HELP}"),
        "quit" | "exit" => return false,
        other => println!("unknown command `{other}`; type `help`"),
    }
    true
}

/// Maps a 1-based list position onto the task's stable id.
fn task_at(store: &TaskStore, rest: &str) -> Option<TaskId> {
    let position: usize = rest.parse().ok()?;
    let task = position
        .checked_sub(1)
        .and_then(|index| store.tasks().get(index))?;
    Some(task.id)
}

fn render(store: &TaskStore) {
    let draft = store.draft();

    if store.tasks().is_empty() {
        println!("(no tasks)");
    } else {
        for (position, task) in store.tasks().iter().enumerate() {
            let marker = if draft.editing_id == Some(task.id) {
                "*"
            } else {
                " "
            };
            if task.description.is_empty() {
                println!("{marker}{}. {}", position + 1, task.title);
            } else {
                println!("{marker}{}. {} :: {}", position + 1, task.title, task.description);
            }
        }
    }

    // The affordance rule: update/cancel while editing, add otherwise.
    if draft.is_editing() {
        println!(
            "[editing] title={:?} desc={:?} (update | cancel)",
            draft.title, draft.description
        );
    } else {
        println!(
            "[compose] title={:?} desc={:?} (add)",
            draft.title, draft.description
        );
    }
    print!("> ");
    let _ = io::stdout().flush();
}

/// Logs land in the OS temp dir; the store works fine unlogged.
fn init_best_effort_logging() {
    let log_dir = std::env::temp_dir().join("taskpad-logs");
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}
