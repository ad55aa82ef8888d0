//! The board reducer: `(state, action) -> state`.
//!
//! This is the only code that mutates tasks or the activity log. It performs
//! no I/O and never fails. Every task action records exactly one log entry,
//! even when the target id does not exist; in that case the entry uses a
//! fallback label instead of the task title.

use taskboard_core::{LogEntry, Loggable, Stamper, SystemStamper};

use crate::action::Action;
use crate::board_state::BoardState;
use crate::task::Task;

/// Label used for an update whose task id is unknown.
pub const UPDATE_FALLBACK_LABEL: &str = "Task";
/// Label used for a move or delete whose task id is unknown.
pub const MISSING_TASK_LABEL: &str = "Unknown";

pub fn reduce(state: BoardState, action: Action) -> BoardState {
    reduce_with(state, action, &mut SystemStamper)
}

/// [`reduce`] with an explicit source of ids and timestamps.
pub fn reduce_with(
    mut state: BoardState,
    action: Action,
    stamper: &mut impl Stamper,
) -> BoardState {
    match action {
        Action::SetState(next) => next,

        Action::ResetBoard => BoardState::default(),

        Action::AddTask(draft) => {
            let task = Task::from_draft(draft, stamper);
            let message = format!("Task \"{}\" created", task.title);
            state.tasks.push(task);
            state.add_log(LogEntry::stamped(message, stamper));
            state
        }

        Action::UpdateTask { id, updates } => {
            let title = title_or(&state, &id, UPDATE_FALLBACK_LABEL);
            if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                task.apply(updates);
            }
            state.add_log(LogEntry::stamped(
                format!("Task \"{}\" updated", title),
                stamper,
            ));
            state
        }

        Action::MoveTask { id, new_status } => {
            let title = title_or(&state, &id, MISSING_TASK_LABEL);
            let message = format!("Task \"{}\" moved to {}", title, new_status);
            if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                task.status = new_status;
            }
            state.add_log(LogEntry::stamped(message, stamper));
            state
        }

        Action::DeleteTask(id) => {
            let title = title_or(&state, &id, MISSING_TASK_LABEL);
            state.tasks.retain(|t| t.id != id);
            state.add_log(LogEntry::stamped(
                format!("Task \"{}\" deleted", title),
                stamper,
            ));
            state
        }

        Action::Unknown(kind) => {
            tracing::debug!("Ignoring unknown action type {}", kind);
            state
        }
    }
}

fn title_or(state: &BoardState, id: &str, fallback: &str) -> String {
    state
        .find_task(id)
        .map(|t| t.title.clone())
        .unwrap_or_else(|| fallback.to_string())
}
