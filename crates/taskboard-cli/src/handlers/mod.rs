pub mod auth;
pub mod board;
pub mod dispatch;
pub mod log;
pub mod task;

use crate::cli::{Cli, Commands};
use crate::context::CliContext;
use clap::CommandFactory;

/// Run one parsed command against an open context.
pub async fn execute(ctx: &mut CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => auth::login(ctx, args).await,
        Commands::Logout => auth::logout(ctx).await,
        Commands::Status => auth::status(ctx),
        Commands::Task(task_cmd) => task::handle(ctx, task_cmd.action).await,
        Commands::Board(board_cmd) => board::handle(ctx, board_cmd.action).await,
        Commands::Log { limit, all } => log::handle(ctx, limit, all),
        Commands::Dispatch { action } => dispatch::handle(ctx, &action).await,
        Commands::Completions { shell } => {
            print_completions(shell);
            Ok(())
        }
    }
}

pub fn print_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
