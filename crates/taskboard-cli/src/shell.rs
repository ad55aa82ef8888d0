//! Interactive mode.
//!
//! Each input line is parsed with the same clap definition as the command
//! line and run against one long-lived context, so a login without
//! `--remember` lasts until the shell exits.

use std::io::IsTerminal;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::Cli;
use crate::context::CliContext;
use crate::handlers;
use crate::output;

const PROMPT: &str = "taskboard> ";

pub async fn run(ctx: &mut CliContext) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if interactive {
            eprint!("{}", PROMPT);
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        let words = match split_words(line) {
            Ok(words) => words,
            Err(e) => {
                output::print_error(&e);
                continue;
            }
        };

        let cli = match Cli::try_parse_from(std::iter::once("taskboard".to_string()).chain(words)) {
            Ok(cli) => cli,
            Err(e) => {
                // --help and --version land here too
                let _ = e.print();
                continue;
            }
        };

        match cli.command {
            Some(command) => {
                if let Err(e) = handlers::execute(ctx, command).await {
                    output::print_error(&e.to_string());
                }
            }
            None => tracing::debug!("Ignoring line without a command"),
        }
    }

    Ok(())
}

/// Split a line into words using POSIX shell quoting rules.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    shell_words::split(line).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(
            split_words("task get --id  abc").unwrap(),
            vec!["task", "get", "--id", "abc"]
        );
    }

    #[test]
    fn test_split_quoted_words() {
        assert_eq!(
            split_words(r#"task add --title "Write the spec" --description 'it''s long'"#).unwrap(),
            vec!["task", "add", "--title", "Write the spec", "--description", "its long"]
        );
    }

    #[test]
    fn test_split_json_argument() {
        let words = split_words(r#"dispatch '{"type":"RESET_BOARD"}'"#).unwrap();
        assert_eq!(words, vec!["dispatch", r#"{"type":"RESET_BOARD"}"#]);
    }

    #[test]
    fn test_split_escapes_and_empty_quotes() {
        assert_eq!(
            split_words(r#"login --secret "a\"b" --identifier """#).unwrap(),
            vec!["login", "--secret", "a\"b", "--identifier", ""]
        );
    }

    #[test]
    fn test_split_backslash_escapes_space() {
        assert_eq!(
            split_words(r"task add --title Write\ spec").unwrap(),
            vec!["task", "add", "--title", "Write spec"]
        );
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert!(split_words("task add --title \"oops").is_err());
        assert!(split_words("task add --title 'oops").is_err());
    }
}
