use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{iso_millis, Stamper, SystemStamper};

/// One line of the board's activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub action: String,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(action: String) -> Self {
        Self::stamped(action, &mut SystemStamper)
    }

    pub fn stamped(action: String, stamper: &mut impl Stamper) -> Self {
        Self {
            id: stamper.next_id(),
            action,
            timestamp: stamper.now(),
        }
    }
}

/// Newest-first, append-only activity history.
pub trait Loggable {
    /// Prepend an entry so that index 0 is always the most recent event.
    fn add_log(&mut self, entry: LogEntry);
    fn get_logs(&self) -> &[LogEntry];
}
