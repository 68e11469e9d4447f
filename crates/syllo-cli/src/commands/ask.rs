//! Ask command implementation.

use crate::cli::AskArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::fs;
use syllo_client::ReasoningClient;
use syllo_domain::{normalize, HistoryRecord, WorkflowResult};
use syllo_export::{workflow_file_name, workflow_to_json, workflow_to_text};
use syllo_history::HistoryStore;

/// Execute the ask command.
///
/// Submits the question, normalizes whatever payload comes back, records
/// the run in history, and prints the staged result. History persistence
/// never fails the command.
pub async fn execute_ask(
    args: AskArgs,
    client: &ReasoningClient,
    store: &mut HistoryStore,
    formatter: &Formatter,
) -> Result<()> {
    let question = args.question.trim();
    if question.is_empty() {
        return Err(CliError::InvalidInput("Question must not be empty".to_string()));
    }

    println!("{}", formatter.info("Submitting question, this can take a while..."));

    let response = client.submit_question(question, args.id).await?;
    let result = normalize(&response.result);

    let timestamp = if response.timestamp.is_empty() {
        chrono::Utc::now().to_rfc3339()
    } else {
        response.timestamp.clone()
    };

    let record =
        HistoryRecord::from_workflow(&response.question_id, question, &timestamp, &result);
    store.add(record);

    println!();
    print!("{}", formatter.format_workflow(&result));

    if args.export_json {
        let path = export_path(&args.out, &response.question_id, "json");
        fs::write(
            &path,
            workflow_to_json(&result, question, &timestamp, &response.question_id),
        )?;
        println!("{}", formatter.success(&format!("Workflow result written to {}", path)));
    }
    if args.export_text {
        let path = export_path(&args.out, &response.question_id, "txt");
        fs::write(
            &path,
            workflow_to_text(&result, question, &timestamp, &response.question_id),
        )?;
        println!("{}", formatter.success(&format!("Workflow result written to {}", path)));
    }

    report_solver_failure(&result, formatter);

    Ok(())
}

fn export_path(out: &Option<String>, question_id: &str, extension: &str) -> String {
    match out {
        Some(path) => path.clone(),
        None => workflow_file_name(question_id, extension),
    }
}

fn report_solver_failure(result: &WorkflowResult, formatter: &Formatter) {
    if !result.asp_result.bool_flag("success") {
        println!("{}", formatter.warning("The solver reported a failure for this question"));
    }
}
