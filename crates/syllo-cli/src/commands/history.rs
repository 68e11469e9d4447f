//! History command implementation.

use crate::cli::HistoryAction;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::io::{self, Write};
use syllo_history::HistoryStore;

/// Execute a history management action.
pub async fn execute_history(
    action: HistoryAction,
    store: &mut HistoryStore,
    formatter: &Formatter,
) -> Result<()> {
    match action {
        HistoryAction::List => {
            println!("{}", formatter.format_records(store.records())?);
        }
        HistoryAction::Search { keyword } => {
            let matches = store.search(&keyword);
            println!("{}", formatter.format_records(&matches)?);
        }
        HistoryAction::Delete { id } => {
            if !store.records().iter().any(|r| r.id == id) {
                return Err(CliError::RecordNotFound(id));
            }
            store.delete(&id);
            println!("{}", formatter.success(&format!("Deleted record {}", id)));
        }
        HistoryAction::Clear { yes } => {
            if store.is_empty() {
                println!("{}", formatter.info("History is already empty"));
                return Ok(());
            }

            if !yes && !confirm(&format!("Delete all {} record(s)?", store.len()))? {
                println!("{}", formatter.info("Operation cancelled"));
                return Ok(());
            }

            store.clear();
            println!("{}", formatter.success("History cleared"));
        }
    }

    Ok(())
}

/// Prompt for a y/N confirmation on stdin.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}
