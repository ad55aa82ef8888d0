//! Derived board view.
//!
//! The view is a pure projection of the task list: filter, optionally sort by
//! due date, then split into the three columns. Nothing here mutates state.

use serde::Serialize;

use crate::filter::{CompositeFilter, PriorityFilter, TaskFilter};
use crate::search::TitleSearcher;
use crate::sort::SortBy;
use crate::task::{Task, TaskStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub priority: PriorityFilter,
    pub sort_by_date: bool,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    pub fn sorted_by_date(mut self, sort_by_date: bool) -> Self {
        self.sort_by_date = sort_by_date;
        self
    }

    fn filter(&self) -> CompositeFilter {
        CompositeFilter::new()
            .with_filter(Box::new(TitleSearcher::new(self.search.clone())))
            .with_filter(Box::new(self.priority))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardView<'a> {
    pub todo: Vec<&'a Task>,
    pub doing: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

impl<'a> BoardView<'a> {
    pub fn column(&self, status: &TaskStatus) -> Option<&[&'a Task]> {
        match status {
            TaskStatus::Todo => Some(&self.todo),
            TaskStatus::Doing => Some(&self.doing),
            TaskStatus::Done => Some(&self.done),
            TaskStatus::Other(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.todo.len() + self.doing.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filtered and (optionally) sorted tasks, before grouping.
pub fn filter_and_sort<'a>(tasks: &'a [Task], query: &ViewQuery) -> Vec<&'a Task> {
    let filter = query.filter();
    let mut visible: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t)).collect();
    if query.sort_by_date {
        SortBy::DueDate.sort_by(&mut visible);
    }
    visible
}

/// Group the visible tasks by column. Tasks whose status is not one of the
/// three columns appear in no group.
pub fn derive_view<'a>(tasks: &'a [Task], query: &ViewQuery) -> BoardView<'a> {
    let mut view = BoardView::default();
    for task in filter_and_sort(tasks, query) {
        match task.status {
            TaskStatus::Todo => view.todo.push(task),
            TaskStatus::Doing => view.doing.push(task),
            TaskStatus::Done => view.done.push(task),
            TaskStatus::Other(_) => {}
        }
    }
    view
}
