mod cli;
mod context;
mod handlers;
mod output;
mod shell;

use clap::Parser;
use cli::{Cli, Commands};
use context::CliContext;
use taskboard_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        handlers::print_completions(*shell);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    let mut ctx = match CliContext::open(cli.data_dir, config).await {
        Ok(ctx) => ctx,
        Err(e) => output::output_error(&e.to_string()),
    };

    match cli.command {
        None => shell::run(&mut ctx).await?,
        Some(command) => {
            if let Err(e) = handlers::execute(&mut ctx, command).await {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}
