//! Drop-to-status mapping for drag and drop.
//!
//! Only the outcome of a drop is modeled: given the dragged task and the id
//! of whatever it was released on, decide which status the task moves to.
//! Columns are addressed as `<status>-column`; dropping onto another task
//! means "the column that task is in".

use crate::action::Action;
use crate::task::{Task, TaskStatus};

const COLUMN_SUFFIX: &str = "-column";

/// Drop target id of a board column.
pub fn column_id(status: &TaskStatus) -> String {
    format!("{}{}", status.as_str(), COLUMN_SUFFIX)
}

/// What a drop target id refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Column(TaskStatus),
    Task(String),
}

impl DropTarget {
    /// Column ids take precedence over task ids.
    pub fn resolve(target_id: &str) -> Self {
        let column = target_id
            .strip_suffix(COLUMN_SUFFIX)
            .map(TaskStatus::from)
            .filter(TaskStatus::is_column);
        match column {
            Some(status) => DropTarget::Column(status),
            None => DropTarget::Task(target_id.to_string()),
        }
    }
}

/// Status the active task should move to, or `None` when the drop changes
/// nothing: no target, unknown task or target, or same status.
pub fn compute_target_status(
    active_task_id: &str,
    drop_target_id: Option<&str>,
    tasks: &[Task],
) -> Option<TaskStatus> {
    let target_id = drop_target_id?;
    let active = tasks.iter().find(|t| t.id == active_task_id)?;

    let target_status = match DropTarget::resolve(target_id) {
        DropTarget::Column(status) => status,
        DropTarget::Task(id) => tasks.iter().find(|t| t.id == id)?.status.clone(),
    };

    if target_status == active.status {
        None
    } else {
        Some(target_status)
    }
}

/// The `MOVE_TASK` action a drop produces, if any.
pub fn move_action_for_drop(
    active_task_id: &str,
    drop_target_id: Option<&str>,
    tasks: &[Task],
) -> Option<Action> {
    compute_target_status(active_task_id, drop_target_id, tasks).map(|new_status| {
        Action::MoveTask {
            id: active_task_id.to_string(),
            new_status,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;
    use taskboard_core::SequentialStamper;

    fn board() -> Vec<Task> {
        let mut s = SequentialStamper::new("t");
        let mut tasks: Vec<Task> = ["one", "two", "three"]
            .iter()
            .map(|title| Task::from_draft(TaskDraft::new(*title), &mut s))
            .collect();
        tasks[1].status = TaskStatus::Doing;
        tasks[2].status = TaskStatus::Done;
        tasks
    }

    #[test]
    fn test_column_ids() {
        assert_eq!(column_id(&TaskStatus::Todo), "todo-column");
        assert_eq!(DropTarget::resolve("done-column"), DropTarget::Column(TaskStatus::Done));
        assert_eq!(
            DropTarget::resolve("archived-column"),
            DropTarget::Task("archived-column".to_string())
        );
    }

    #[test]
    fn test_drop_on_column() {
        let tasks = board();
        assert_eq!(
            compute_target_status("t-1", Some("doing-column"), &tasks),
            Some(TaskStatus::Doing)
        );
    }

    #[test]
    fn test_drop_on_task_inherits_status() {
        let tasks = board();
        assert_eq!(
            compute_target_status("t-1", Some("t-3"), &tasks),
            Some(TaskStatus::Done)
        );
    }

    #[test]
    fn test_same_status_is_no_move() {
        let tasks = board();
        assert_eq!(compute_target_status("t-2", Some("doing-column"), &tasks), None);
        assert_eq!(compute_target_status("t-1", Some("t-1"), &tasks), None);
    }

    #[test]
    fn test_missing_target_or_task() {
        let tasks = board();
        assert_eq!(compute_target_status("t-1", None, &tasks), None);
        assert_eq!(compute_target_status("t-1", Some("nowhere"), &tasks), None);
        assert_eq!(compute_target_status("ghost", Some("done-column"), &tasks), None);
    }

    #[test]
    fn test_move_action_for_drop() {
        let tasks = board();
        assert_eq!(
            move_action_for_drop("t-3", Some("todo-column"), &tasks),
            Some(Action::MoveTask {
                id: "t-3".to_string(),
                new_status: TaskStatus::Todo,
            })
        );
        assert_eq!(move_action_for_drop("t-3", Some("done-column"), &tasks), None);
    }
}
