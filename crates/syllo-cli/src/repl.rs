//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! A bare line is treated as a question; store and history management
//! live behind `:`-prefixed meta commands so question text never
//! collides with them.

use crate::cli::{AskArgs, ExportArgs, HistoryAction};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use syllo_client::ReasoningClient;
use syllo_history::HistoryStore;

/// Run the interactive REPL.
pub async fn run_repl(
    config: &Config,
    client: &ReasoningClient,
    store: &mut HistoryStore,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Syllo REPL - Type a question, ':help' for commands, ':quit' to exit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    let history_path = Config::repl_history_path()?;
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("syllo> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_line(line) {
                    Ok(ReplCommand::Quit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) =
                            execute_repl_command(cmd, config, client, store, formatter).await
                        {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use ':quit' to exit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Ask(String),
    History,
    Search(String),
    Delete(String),
    Clear,
    Export(Option<String>),
    Health,
    Help,
    Quit,
}

/// Parse a REPL line into a command.
fn parse_repl_line(line: &str) -> Result<ReplCommand> {
    if !line.starts_with(':') {
        return Ok(ReplCommand::Ask(line.to_string()));
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts[0] {
        ":quit" | ":exit" | ":q" => Ok(ReplCommand::Quit),
        ":help" | ":?" => Ok(ReplCommand::Help),
        ":history" | ":h" => Ok(ReplCommand::History),
        ":search" => {
            if parts.len() < 2 {
                return Err(CliError::InvalidInput("Usage: :search <keyword>".to_string()));
            }
            Ok(ReplCommand::Search(parts[1..].join(" ")))
        }
        ":delete" => {
            if parts.len() != 2 {
                return Err(CliError::InvalidInput("Usage: :delete <id>".to_string()));
            }
            Ok(ReplCommand::Delete(parts[1].to_string()))
        }
        ":clear" => Ok(ReplCommand::Clear),
        ":export" => Ok(ReplCommand::Export(parts.get(1).map(|s| s.to_string()))),
        ":health" => Ok(ReplCommand::Health),
        other => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type ':help' for available commands.",
            other
        ))),
    }
}

/// Execute a parsed REPL command.
async fn execute_repl_command(
    cmd: ReplCommand,
    _config: &Config,
    client: &ReasoningClient,
    store: &mut HistoryStore,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        ReplCommand::Ask(question) => {
            let args = AskArgs {
                question,
                id: None,
                export_json: false,
                export_text: false,
                out: None,
            };
            commands::execute_ask(args, client, store, formatter).await?;
        }
        ReplCommand::History => {
            commands::execute_history(HistoryAction::List, store, formatter).await?;
        }
        ReplCommand::Search(keyword) => {
            commands::execute_history(HistoryAction::Search { keyword }, store, formatter).await?;
        }
        ReplCommand::Delete(id) => {
            commands::execute_history(HistoryAction::Delete { id }, store, formatter).await?;
        }
        ReplCommand::Clear => {
            commands::execute_history(HistoryAction::Clear { yes: false }, store, formatter)
                .await?;
        }
        ReplCommand::Export(id) => {
            let args = ExportArgs {
                all: id.is_none(),
                id,
                text: false,
                out: None,
            };
            commands::execute_export(args, store, formatter).await?;
        }
        ReplCommand::Health => {
            commands::execute_health(client, formatter).await?;
        }
        ReplCommand::Help | ReplCommand::Quit => unreachable!(),
    }

    Ok(())
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <question text>      - Submit a question to the reasoning backend");
    println!("  :history, :h         - List stored records, newest first");
    println!("  :search <keyword>    - Filter records by keyword");
    println!("  :delete <id>         - Delete every record with the given id");
    println!("  :clear               - Delete all records (asks for confirmation)");
    println!("  :export [id]         - Export a record, or the whole history");
    println!("  :health              - Check backend health");
    println!("  :help, :?            - Show this help");
    println!("  :quit, :exit, :q     - Exit REPL");
    println!();
}
