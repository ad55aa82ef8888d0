//! Task sorting.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::task::Task;

pub enum SortBy {
    /// Ascending due date. Tasks without a date sort after every dated task.
    DueDate,
}

impl SortBy {
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::DueDate => match (a.due_date, b.due_date) {
                (Some(ad), Some(bd)) => ad.cmp(&bd),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }

    /// Stable sort in place. Works with both `&Task` and `Task` elements.
    pub fn sort_by<T: Borrow<Task>>(&self, tasks: &mut [T]) {
        tasks.sort_by(|a, b| self.compare(a.borrow(), b.borrow()));
    }
}
