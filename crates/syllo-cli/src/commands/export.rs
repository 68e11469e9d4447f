//! Export command implementation.

use crate::cli::ExportArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::fs;
use syllo_export::{
    history_file_name, history_to_json, history_to_text, record_file_name, record_to_json,
    record_to_text,
};
use syllo_history::HistoryStore;

/// Execute the export command.
pub async fn execute_export(
    args: ExportArgs,
    store: &HistoryStore,
    formatter: &Formatter,
) -> Result<()> {
    let extension = if args.text { "txt" } else { "json" };

    let (path, contents) = if args.all {
        let contents = if args.text {
            history_to_text(store.records())
        } else {
            history_to_json(store.records())
        };
        let path = args
            .out
            .unwrap_or_else(|| history_file_name(extension));
        (path, contents)
    } else {
        let id = args.id.ok_or_else(|| {
            CliError::InvalidInput("Provide a record id, or --all for the whole history".to_string())
        })?;
        let record = store
            .records()
            .iter()
            .find(|r| r.id == id)
            .ok_or(CliError::RecordNotFound(id))?;

        let contents = if args.text {
            record_to_text(record)
        } else {
            record_to_json(record)
        };
        let path = args
            .out
            .unwrap_or_else(|| record_file_name(record, extension));
        (path, contents)
    };

    fs::write(&path, contents)?;
    println!("{}", formatter.success(&format!("Exported to {}", path)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use serde_json::json;
    use syllo_domain::{normalize, HistoryRecord};
    use tempfile::TempDir;

    fn store_with_record(dir: &TempDir) -> HistoryStore {
        let mut store = HistoryStore::new(dir.path().join("history.json"));
        let result = normalize(&json!({
            "asp_result": {"success": true},
            "final_answer": "{\"answer\":\"yes\"}"
        }));
        store.add(HistoryRecord::from_workflow(
            "q_1",
            "Is A a B?",
            "2026-08-24T10:00:00Z",
            &result,
        ));
        store
    }

    #[tokio::test]
    async fn test_export_single_record_as_text() {
        let dir = TempDir::new().unwrap();
        let store = store_with_record(&dir);
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let out = dir.path().join("record.txt");

        execute_export(
            ExportArgs {
                id: Some("q_1".to_string()),
                all: false,
                text: true,
                out: Some(out.to_string_lossy().into_owned()),
            },
            &store,
            &formatter,
        )
        .await
        .unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("逻辑推理结果报告"));
        assert!(written.contains("问题：Is A a B?"));
    }

    #[tokio::test]
    async fn test_export_all_as_json() {
        let dir = TempDir::new().unwrap();
        let store = store_with_record(&dir);
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let out = dir.path().join("history-export.json");

        execute_export(
            ExportArgs {
                id: None,
                all: true,
                text: false,
                out: Some(out.to_string_lossy().into_owned()),
            },
            &store,
            &formatter,
        )
        .await
        .unwrap();

        let written = fs::read_to_string(&out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(1));
    }

    #[tokio::test]
    async fn test_export_without_id_or_all_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_with_record(&dir);
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result = execute_export(
            ExportArgs {
                id: None,
                all: false,
                text: false,
                out: None,
            },
            &store,
            &formatter,
        )
        .await;

        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_export_unknown_record_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_with_record(&dir);
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result = execute_export(
            ExportArgs {
                id: Some("q_missing".to_string()),
                all: false,
                text: false,
                out: None,
            },
            &store,
            &formatter,
        )
        .await;

        assert!(matches!(result, Err(CliError::RecordNotFound(_))));
    }
}
