//! Syllo Export Formatter
//!
//! Pure document builders for history records and workflow results.
//! Everything here returns a `String`; writing the document anywhere is
//! the caller's concern. JSON documents are pretty-printed with key order
//! matching the canonical shapes; text documents follow the product's
//! fixed report templates.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use syllo_domain::{stage_views, HistoryRecord, JsonField, WorkflowResult};

/// Rule line between blocks in a multi-record text export.
const BLOCK_SEPARATOR_WIDTH: usize = 50;

// ---------------------------------------------------------------------------
// Timestamp display

/// Format an ISO-8601 timestamp for display (`2026/08/24 10:00:00`).
/// Unparseable input is shown as-is rather than dropped.
pub fn format_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(time) => time.format("%Y/%m/%d %H:%M:%S").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Format an ISO-8601 timestamp as a filesystem-safe date (`2026-08-24`).
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(time) => time.format("%Y-%m-%d").to_string(),
        Err(_) => "unknown".to_string(),
    }
}

// ---------------------------------------------------------------------------
// File names

/// File name for a single-record export: `推理结果_<date>_<id>.<ext>`.
pub fn record_file_name(record: &HistoryRecord, extension: &str) -> String {
    format!(
        "推理结果_{}_{}.{}",
        format_date(&record.timestamp),
        record.id,
        extension
    )
}

/// File name for a full-history export: `历史记录_<today>.<ext>`.
pub fn history_file_name(extension: &str) -> String {
    format!("历史记录_{}.{}", Utc::now().format("%Y-%m-%d"), extension)
}

/// File name for a workflow-result export: `workflow_result_<id>.<ext>`.
pub fn workflow_file_name(question_id: &str, extension: &str) -> String {
    format!("workflow_result_{}.{}", question_id, extension)
}

// ---------------------------------------------------------------------------
// JSON documents

/// Pretty-printed JSON for a single record.
pub fn record_to_json(record: &HistoryRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_default()
}

/// Pretty-printed JSON for a record collection, list order preserved.
pub fn history_to_json(records: &[HistoryRecord]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_default()
}

/// Export envelope for a full workflow result.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkflowEnvelope<'a> {
    question_id: &'a str,
    question: &'a str,
    timestamp: &'a str,
    workflow_result: &'a WorkflowResult,
    current_step: &'a str,
}

/// Pretty-printed JSON for a workflow result with its question context.
pub fn workflow_to_json(
    result: &WorkflowResult,
    question: &str,
    timestamp: &str,
    question_id: &str,
) -> String {
    let envelope = WorkflowEnvelope {
        question_id,
        question,
        timestamp,
        workflow_result: result,
        current_step: &result.current_step,
    };
    serde_json::to_string_pretty(&envelope).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Text documents

fn record_block(heading: &str, record: &HistoryRecord) -> String {
    format!(
        "{}\n==================\n\n问题：{}\n\n求解结果：{}\n\n生成时间：{}",
        heading,
        record.question,
        record.result,
        format_time(&record.timestamp)
    )
}

/// Fixed report block for a single record.
pub fn record_to_text(record: &HistoryRecord) -> String {
    record_block("逻辑推理结果报告", record)
}

/// Text export for a record collection: index-numbered blocks in list
/// order, separated by a rule line, with no separator after the last.
pub fn history_to_text(records: &[HistoryRecord]) -> String {
    let separator = format!("\n\n{}\n\n", "=".repeat(BLOCK_SEPARATOR_WIDTH));
    let blocks: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(index, record)| record_block(&format!("推理记录 {}", index + 1), record))
        .collect();
    blocks.join(&separator)
}

/// Summary lines for a final answer.
///
/// Structured answers render their `answer`, `confidence` (as a
/// one-decimal percentage) and `explanation` fields; anything else
/// renders as its display text.
pub fn final_answer_text(final_answer: &JsonField) -> String {
    let map = match final_answer {
        JsonField::Parsed(Value::Object(map)) => map,
        other => return other.display_text(),
    };

    let mut lines = Vec::new();
    if let Some(answer) = map.get("answer") {
        if !answer.is_null() {
            lines.push(format!("答案: {}", value_text(answer)));
        }
    }
    if let Some(confidence) = map.get("confidence").and_then(Value::as_f64) {
        lines.push(format!("置信度: {:.1}%", confidence * 100.0));
    }
    if let Some(explanation) = map.get("explanation") {
        if !explanation.is_null() {
            lines.push(format!("解释: {}", value_text(explanation)));
        }
    }

    if lines.is_empty() {
        final_answer.display_text()
    } else {
        lines.join("\n")
    }
}

/// Full text export of a workflow result: header lines, one labeled
/// section per pipeline stage in fixed order, then the final-answer
/// summary.
pub fn workflow_to_text(
    result: &WorkflowResult,
    question: &str,
    timestamp: &str,
    question_id: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("问题: {}\n", question));
    out.push_str(&format!("问题ID: {}\n", question_id));
    out.push_str(&format!("时间: {}\n", format_time(timestamp)));
    out.push_str(&format!("当前步骤: {}\n\n", result.current_step));

    for view in stage_views(result) {
        out.push_str(&format!("=== {} ===\n", view.stage.title()));
        out.push_str(&format!("{}\n", view.stage.description()));
        out.push_str(&format!("{}\n\n", view.content));
    }

    out.push_str("=== 最终答案摘要 ===\n");
    out.push_str(&final_answer_text(&result.final_answer));
    out.push('\n');
    out
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
