//! History records.
//!
//! A [`HistoryRecord`] is the persisted summary of one past
//! question/answer interaction: the question text, a short result line
//! derived from the final answer, and the per-step outcome of the run.
//! Records are created once and never updated in place.

use crate::field::JsonField;
use crate::workflow::WorkflowResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of one reasoning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// The step completed.
    Success,
    /// The step failed.
    Error,
    /// The step has not finished.
    Pending,
}

/// One labeled step inside a history record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningStep {
    /// Human-readable step label.
    pub label: String,
    /// Step outcome.
    pub status: StepStatus,
}

/// Persisted summary of one reasoning interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique record id, assigned by the caller.
    pub id: String,
    /// The question as submitted.
    pub question: String,
    /// Short summary of the final answer.
    pub result: String,
    /// ISO-8601 creation timestamp.
    pub timestamp: String,
    /// Per-step outcomes, in pipeline order.
    #[serde(default)]
    pub steps: Vec<ReasoningStep>,
}

/// Summary line shown when no structured answer is available.
const DEFAULT_SUMMARY: &str = "推理完成";

/// Label of the solver step inside a record.
const SOLVER_STEP_LABEL: &str = "ASP求解";

/// Step labels recorded for every run, in pipeline order.
const STEP_LABELS: [&str; 8] = [
    "实体提取",
    "关系提取",
    "搜索空间生成",
    "论证构建",
    "求解目标构建",
    "ASP程序拼接",
    SOLVER_STEP_LABEL,
    "结果解释",
];

impl HistoryRecord {
    /// Build a record from a normalized workflow result.
    ///
    /// Every step reads as successful except the solver step, which
    /// follows the `success` flag of the solver output.
    pub fn from_workflow(
        id: impl Into<String>,
        question: impl Into<String>,
        timestamp: impl Into<String>,
        result: &WorkflowResult,
    ) -> Self {
        let solver_ok = result.asp_result.bool_flag("success");
        let steps = STEP_LABELS
            .iter()
            .map(|&label| ReasoningStep {
                label: label.to_string(),
                status: if label == SOLVER_STEP_LABEL && !solver_ok {
                    StepStatus::Error
                } else {
                    StepStatus::Success
                },
            })
            .collect();

        Self {
            id: id.into(),
            question: question.into(),
            result: answer_summary(&result.final_answer),
            timestamp: timestamp.into(),
            steps,
        }
    }
}

/// Derive the one-line result summary from a final answer.
///
/// Structured answers contribute their `answer` field; raw or string
/// answers are used as-is; anything empty falls back to a fixed label.
pub fn answer_summary(final_answer: &JsonField) -> String {
    match final_answer {
        JsonField::Parsed(Value::Object(map)) => map
            .get("answer")
            .and_then(Value::as_str)
            .filter(|answer| !answer.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        JsonField::Parsed(Value::String(text)) | JsonField::Raw(text) if !text.is_empty() => {
            text.clone()
        }
        JsonField::Parsed(Value::Number(number)) => number.to_string(),
        _ => DEFAULT_SUMMARY.to_string(),
    }
}
