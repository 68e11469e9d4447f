//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Syllo CLI - Ask logic questions against the ASP reasoning backend.
#[derive(Debug, Parser)]
#[command(name = "syllo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Backend endpoint (overrides configuration)
    #[arg(short, long, global = true, env = "SYLLO_ENDPOINT")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a question and wait for the reasoning result
    Ask(AskArgs),

    /// Inspect and manage the local history
    History(HistoryArgs),

    /// Export a record or the whole history to a file
    Export(ExportArgs),

    /// Check backend health
    Health,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The question text
    pub question: String,

    /// Use a fixed question id instead of a generated one
    #[arg(long)]
    pub id: Option<String>,

    /// Also write the full workflow result as JSON
    #[arg(long)]
    pub export_json: bool,

    /// Also write the full workflow result as plain text
    #[arg(long)]
    pub export_text: bool,

    /// Output file for --export-json / --export-text
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for history management.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub action: HistoryAction,
}

/// History management actions.
#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// List all stored records, newest first
    List,

    /// Filter records by a keyword over question and answer text
    Search {
        /// Keyword (case-insensitive substring)
        keyword: String,
    },

    /// Delete every record with the given id
    Delete {
        /// Record id
        id: String,
    },

    /// Delete all records
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Id of the record to export
    pub id: Option<String>,

    /// Export the entire history instead of a single record
    #[arg(long)]
    pub all: bool,

    /// Write plain text instead of JSON
    #[arg(short, long)]
    pub text: bool,

    /// Output file (defaults to a dated name in the current directory)
    #[arg(short, long)]
    pub out: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_command() {
        let cli = Cli::parse_from(["syllo", "ask", "All A are B. Is A a B?"]);
        match cli.command {
            Some(Command::Ask(args)) => {
                assert_eq!(args.question, "All A are B. Is A a B?");
                assert!(args.id.is_none());
            }
            _ => panic!("Expected Ask command"),
        }
    }

    #[test]
    fn test_history_search_command() {
        let cli = Cli::parse_from(["syllo", "history", "search", "subset"]);
        match cli.command {
            Some(Command::History(HistoryArgs {
                action: HistoryAction::Search { keyword },
            })) => assert_eq!(keyword, "subset"),
            _ => panic!("Expected History Search command"),
        }
    }

    #[test]
    fn test_export_all_flag() {
        let cli = Cli::parse_from(["syllo", "export", "--all", "--text"]);
        match cli.command {
            Some(Command::Export(args)) => {
                assert!(args.all);
                assert!(args.text);
                assert!(args.id.is_none());
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_global_endpoint_flag() {
        let cli = Cli::parse_from(["syllo", "--endpoint", "http://example.com:9000", "health"]);
        assert_eq!(cli.endpoint.as_deref(), Some("http://example.com:9000"));
        assert!(matches!(cli.command, Some(Command::Health)));
    }
}
