use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use taskboard_domain::{PriorityFilter, TaskPriority, TaskStatus};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TASKBOARD_BUILD_COMMIT"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(about = "A kanban task board with an activity log", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Directory holding the board records (or set TASKBOARD_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR", env = "TASKBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "FILE", env = "TASKBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in to the board
    Login(LoginArgs),
    /// Log out and forget a remembered login
    Logout,
    /// Show session and board status
    Status,
    /// Task operations
    Task(TaskCommand),
    /// Board operations
    Board(BoardCommand),
    /// Show recent activity
    Log {
        /// Number of entries to show (defaults to the configured display limit)
        #[arg(long)]
        limit: Option<usize>,
        /// Show the whole log
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },
    /// Dispatch a raw action, e.g. '{"type":"RESET_BOARD"}'
    Dispatch {
        #[arg(value_name = "JSON")]
        action: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long, visible_alias = "email", default_value = "")]
    pub identifier: String,
    #[arg(long, visible_alias = "password", default_value = "")]
    pub secret: String,
    /// Stay logged in across invocations
    #[arg(long)]
    pub remember: bool,
}

// Task commands
#[derive(Args, Debug)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// Create a new task in the todo column
    Add(TaskAddArgs),
    /// Get a specific task
    Get {
        #[arg(long)]
        id: String,
    },
    /// Update a task
    Update(TaskUpdateArgs),
    /// Move a task to another column
    Move {
        #[arg(long)]
        id: String,
        #[arg(long, value_parser = parse_status)]
        status: TaskStatus,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct TaskAddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_parser = parse_priority)]
    pub priority: Option<TaskPriority>,
    #[arg(long, value_parser = parse_date)]
    pub due_date: Option<NaiveDate>,
    /// Repeat or separate with commas
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Args, Debug)]
pub struct TaskUpdateArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_parser = parse_priority)]
    pub priority: Option<TaskPriority>,
    #[arg(long, value_parser = parse_date)]
    pub due_date: Option<NaiveDate>,
    #[arg(long, conflicts_with = "due_date")]
    pub clear_due_date: bool,
    /// Replaces all tags. Repeat or separate with commas
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Option<Vec<String>>,
}

// Board commands
#[derive(Args, Debug)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand, Debug)]
pub enum BoardAction {
    /// Show the board grouped into columns
    View(ViewArgs),
    /// Delete every task and the activity log
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Drop a task onto a column (`todo-column`, ...) or onto another task
    Drop {
        #[arg(long)]
        id: String,
        #[arg(long)]
        target: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Case-insensitive title search
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long, default_value = "all", value_parser = parse_priority_filter)]
    pub priority: PriorityFilter,
    /// Order each column by due date, undated tasks last
    #[arg(long)]
    pub sort_by_date: bool,
}

fn parse_priority(s: &str) -> Result<TaskPriority, String> {
    s.parse()
}

fn parse_priority_filter(s: &str) -> Result<PriorityFilter, String> {
    s.parse()
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    let status = TaskStatus::from(s.to_lowercase());
    if status.is_column() {
        Ok(status)
    } else {
        Err(format!("Invalid status '{}'. Valid values: todo, doing, done", s))
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_task_add() {
        let cli = Cli::try_parse_from([
            "taskboard",
            "task",
            "add",
            "--title",
            "Write spec",
            "--priority",
            "HIGH",
            "--tag",
            "docs,writing",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Task(TaskCommand {
                action: TaskAction::Add(args),
            })) => {
                assert_eq!(args.title, "Write spec");
                assert_eq!(args.priority, Some(TaskPriority::High));
                assert_eq!(args.tags, vec!["docs", "writing"]);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_move_rejects_unknown_status() {
        assert!(Cli::try_parse_from([
            "taskboard", "task", "move", "--id", "a", "--status", "blocked"
        ])
        .is_err());
    }

    #[test]
    fn test_view_defaults() {
        let cli = Cli::try_parse_from(["taskboard", "board", "view"]).unwrap();
        match cli.command {
            Some(Commands::Board(BoardCommand {
                action: BoardAction::View(args),
            })) => {
                assert_eq!(args.priority, PriorityFilter::All);
                assert!(args.search.is_empty());
                assert!(!args.sort_by_date);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_update_due_date_conflicts_with_clear() {
        assert!(Cli::try_parse_from([
            "taskboard",
            "task",
            "update",
            "--id",
            "a",
            "--due-date",
            "2024-01-01",
            "--clear-due-date"
        ])
        .is_err());
    }
}
