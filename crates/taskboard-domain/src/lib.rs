pub mod action;
pub mod board_state;
pub mod drag;
pub mod field_update;
pub mod filter;
pub mod reducer;
pub mod search;
pub mod sort;
pub mod task;
pub mod view;

pub use action::Action;
pub use board_state::BoardState;
pub use drag::{column_id, compute_target_status, move_action_for_drop, DropTarget};
pub use field_update::FieldUpdate;
pub use filter::{CompositeFilter, PriorityFilter, StatusFilter, TaskFilter};
pub use reducer::{reduce, reduce_with};
pub use search::TitleSearcher;
pub use sort::SortBy;
pub use task::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus, TaskUpdate};
pub use view::{derive_view, filter_and_sort, BoardView, ViewQuery};
