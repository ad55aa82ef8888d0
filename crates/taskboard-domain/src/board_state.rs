use serde::{Deserialize, Serialize};
use taskboard_core::{LogEntry, Loggable};

use crate::task::Task;

/// Everything the board persists: the tasks in insertion order and the
/// activity log, newest entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub tasks: Vec<Task>,
    pub activity_log: Vec<LogEntry>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The newest `limit` log entries.
    pub fn recent_activity(&self, limit: usize) -> &[LogEntry] {
        &self.activity_log[..limit.min(self.activity_log.len())]
    }

    /// Drop all but the newest `limit` log entries.
    pub fn truncate_activity(&mut self, limit: usize) {
        self.activity_log.truncate(limit);
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.activity_log.is_empty()
    }
}

impl Loggable for BoardState {
    fn add_log(&mut self, entry: LogEntry) {
        self.activity_log.insert(0, entry);
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.activity_log
    }
}
