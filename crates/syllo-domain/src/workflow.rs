//! Workflow-result normalization.
//!
//! The backend reports each pipeline stage as a string field, but the
//! solver result, interpretation and final answer arrive in whatever
//! encoding the upstream services produced that run: structured objects,
//! JSON-encoded strings, or JSON wrapped in Markdown code fences.
//! [`normalize`] turns any such payload into a [`WorkflowResult`].
//!
//! Normalization never fails. When the interpretation or final answer
//! cannot be parsed, the whole record is rebuilt in a fallback mode that
//! keeps the stripped-but-unparsed text as the field value, so the record
//! still carries displayable content.

use crate::field::JsonField;
use serde::Serialize;
use serde_json::Value;

/// Canonical, display-ready form of one reasoning workflow response.
///
/// Always fully constructible from any input. At worst, fields degrade to
/// their raw string form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResult {
    /// Entities and categories extracted from the question.
    pub entities: String,
    /// Relations and predicates between the entities.
    pub relations: String,
    /// Generated search rules and constraints.
    pub search_space: String,
    /// Constructed arguments and side conditions.
    pub arguments: String,
    /// Solving targets and verification conditions.
    pub targets: String,
    /// The assembled ASP program.
    pub asp_program: String,
    /// Solver output, structured when it parsed (`success`, `models`,
    /// `model_count`), raw text when it did not.
    pub asp_result: JsonField,
    /// Explanation of the solver output.
    pub interpretation: JsonField,
    /// Final answer payload. Structured answers keep their `answer`,
    /// `confidence` and `explanation` fields verbatim, nested or flat.
    pub final_answer: JsonField,
    /// Label of the pipeline step the backend last reported.
    pub current_step: String,
}

/// Normalize a raw backend response into a [`WorkflowResult`].
///
/// Total over all inputs, including non-object values: absent fields map
/// to empty defaults, unparseable JSON degrades to raw text, and nothing
/// here panics or returns an error.
pub fn normalize(raw: &Value) -> WorkflowResult {
    let interpretation = parse_json_block(raw, "interpretation");
    let final_answer = parse_json_block(raw, "final_answer");

    match (interpretation, final_answer) {
        (Some(interpretation), Some(final_answer)) => WorkflowResult {
            entities: text_field(raw, "entities"),
            relations: text_field(raw, "relations"),
            search_space: text_field(raw, "search_space"),
            arguments: text_field(raw, "arguments"),
            targets: text_field(raw, "targets"),
            asp_program: text_field(raw, "asp_program"),
            asp_result: solver_field(raw, true),
            interpretation,
            final_answer,
            current_step: step_field(raw),
        },
        // Either block failed to parse: rebuild everything, keeping the
        // stripped text as-is.
        _ => normalize_unparsed(raw),
    }
}

/// Fallback mode. Re-derives every field from the raw input without any
/// JSON parsing of the fenced blocks, so it cannot itself fail.
fn normalize_unparsed(raw: &Value) -> WorkflowResult {
    WorkflowResult {
        entities: text_field(raw, "entities"),
        relations: text_field(raw, "relations"),
        search_space: text_field(raw, "search_space"),
        arguments: text_field(raw, "arguments"),
        targets: text_field(raw, "targets"),
        asp_program: text_field(raw, "asp_program"),
        asp_result: solver_field(raw, false),
        interpretation: raw_json_block(raw, "interpretation"),
        final_answer: raw_json_block(raw, "final_answer"),
        current_step: step_field(raw),
    }
}

/// Strip a leading ```` ```json ```` marker and a trailing ```` ``` ````
/// marker. Exact, case-sensitive matches only, surrounding whitespace
/// trimmed.
fn strip_code_fence(text: &str) -> String {
    let mut inner = text.trim();
    if let Some(rest) = inner.strip_prefix("```json") {
        inner = rest.trim_start();
    }
    if let Some(rest) = inner.strip_suffix("```") {
        inner = rest.trim_end();
    }
    inner.trim().to_string()
}

/// Plain stage field: strings pass through, absence becomes `""`, and any
/// other scalar is stringified rather than dropped.
fn text_field(raw: &Value, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(text)) => text.clone(),
        None | Some(Value::Null) => String::new(),
        Some(value) => value.to_string(),
    }
}

fn step_field(raw: &Value) -> String {
    match raw.get("current_step") {
        Some(Value::String(step)) if !step.is_empty() => step.clone(),
        _ => "unknown".to_string(),
    }
}

/// The solver result: already-structured values are kept, strings get a
/// parse attempt in the primary mode but stay raw in the fallback mode,
/// absence is an empty structured object.
fn solver_field(raw: &Value, parse_strings: bool) -> JsonField {
    match raw.get("asp_result") {
        None | Some(Value::Null) => JsonField::empty_object(),
        Some(Value::String(text)) if parse_strings => JsonField::from_text(text),
        Some(Value::String(text)) => JsonField::Raw(text.clone()),
        Some(value) => JsonField::Parsed(value.clone()),
    }
}

/// Primary parse of a fenced JSON block. Accepts both string and
/// already-structured inputs since upstream encoding is inconsistent.
/// `None` means the string form did not parse and the caller must switch
/// to the fallback mode.
fn parse_json_block(raw: &Value, key: &str) -> Option<JsonField> {
    match raw.get(key) {
        None | Some(Value::Null) => Some(JsonField::empty_object()),
        Some(Value::String(text)) => {
            let cleaned = if text.is_empty() {
                "{}".to_string()
            } else {
                strip_code_fence(text)
            };
            serde_json::from_str(&cleaned).ok().map(JsonField::Parsed)
        }
        Some(value) => Some(JsonField::Parsed(value.clone())),
    }
}

/// Fallback form of a fenced JSON block: fences stripped, no parsing.
fn raw_json_block(raw: &Value, key: &str) -> JsonField {
    match raw.get(key) {
        None | Some(Value::Null) => JsonField::Raw("{}".to_string()),
        Some(Value::String(text)) => {
            if text.is_empty() {
                JsonField::Raw("{}".to_string())
            } else {
                JsonField::Raw(strip_code_fence(text))
            }
        }
        Some(value) => JsonField::Parsed(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_yields_defaults() {
        let result = normalize(&json!({}));
        assert_eq!(result.entities, "");
        assert_eq!(result.relations, "");
        assert_eq!(result.search_space, "");
        assert_eq!(result.arguments, "");
        assert_eq!(result.targets, "");
        assert_eq!(result.asp_program, "");
        assert_eq!(result.asp_result, JsonField::empty_object());
        assert_eq!(result.interpretation, JsonField::Parsed(json!({})));
        assert_eq!(result.final_answer, JsonField::Parsed(json!({})));
        assert_eq!(result.current_step, "unknown");
    }

    #[test]
    fn test_non_object_input_is_total() {
        let result = normalize(&json!("not even a map"));
        assert_eq!(result.current_step, "unknown");
        assert_eq!(result.asp_result, JsonField::empty_object());
    }

    #[test]
    fn test_plain_fields_copied() {
        let raw = json!({
            "entities": "category(letter, type).",
            "relations": "transitive_subset(letter, type).",
            "current_step": "completed"
        });
        let result = normalize(&raw);
        assert_eq!(result.entities, "category(letter, type).");
        assert_eq!(result.relations, "transitive_subset(letter, type).");
        assert_eq!(result.current_step, "completed");
    }

    #[test]
    fn test_stringified_solver_result_parses() {
        let raw = json!({
            "asp_result": "{\"success\":true,\"models\":[\"m1\"],\"model_count\":1}"
        });
        let result = normalize(&raw);
        assert!(result.asp_result.bool_flag("success"));
        assert_eq!(
            result.asp_result.get("model_count").and_then(Value::as_u64),
            Some(1)
        );
    }

    #[test]
    fn test_unparseable_solver_result_stays_raw() {
        let raw = json!({"asp_result": "UNSATISFIABLE"});
        let result = normalize(&raw);
        assert_eq!(result.asp_result, JsonField::Raw("UNSATISFIABLE".to_string()));
    }

    #[test]
    fn test_structured_solver_result_kept_as_is() {
        let raw = json!({"asp_result": {"success": true, "models": [], "model_count": 0}});
        let result = normalize(&raw);
        assert!(result.asp_result.bool_flag("success"));
    }

    #[test]
    fn test_fenced_final_answer_roundtrip() {
        let answer = json!({"answer": "yes", "confidence": 0.95});
        let fenced = format!("```json\n{}\n```", answer);
        let result = normalize(&json!({"final_answer": fenced}));
        assert_eq!(result.final_answer, JsonField::Parsed(answer));
    }

    #[test]
    fn test_plain_json_final_answer() {
        let raw = json!({"final_answer": "{\"answer\":\"yes\",\"confidence\":0.95}"});
        let result = normalize(&raw);
        assert_eq!(
            result.final_answer.get("answer").and_then(Value::as_str),
            Some("yes")
        );
        assert_eq!(
            result.final_answer.get("confidence").and_then(Value::as_f64),
            Some(0.95)
        );
    }

    #[test]
    fn test_object_final_answer_accepted() {
        let raw = json!({"final_answer": {"answer": "no", "confidence": 0.4}});
        let result = normalize(&raw);
        assert_eq!(
            result.final_answer.get("answer").and_then(Value::as_str),
            Some("no")
        );
    }

    #[test]
    fn test_nested_final_answer_preserved_verbatim() {
        let answer = json!({
            "answer": {"verdict": "yes", "detail": {"depth": 3}},
            "confidence": 0.8,
            "explanation": "transitivity"
        });
        let result = normalize(&json!({"final_answer": answer.to_string()}));
        assert_eq!(result.final_answer, JsonField::Parsed(answer));
    }

    #[test]
    fn test_truncated_json_switches_to_fallback() {
        let raw = json!({
            "entities": "category(a).",
            "interpretation": "{\"answer\": \"yes\"}",
            "final_answer": "```json\n{\"answer\": \"yes\", \"confi\n```",
            "asp_result": "{\"success\":true}"
        });
        let result = normalize(&raw);
        // plain fields survive
        assert_eq!(result.entities, "category(a).");
        // the whole record is re-derived: both blocks stay raw even though
        // interpretation alone would have parsed
        assert_eq!(
            result.interpretation,
            JsonField::Raw("{\"answer\": \"yes\"}".to_string())
        );
        assert_eq!(
            result.final_answer,
            JsonField::Raw("{\"answer\": \"yes\", \"confi".to_string())
        );
        // and the solver string is kept unparsed in fallback mode
        assert_eq!(
            result.asp_result,
            JsonField::Raw("{\"success\":true}".to_string())
        );
    }

    #[test]
    fn test_plain_text_final_answer_falls_back() {
        let result = normalize(&json!({"final_answer": "the answer is yes"}));
        assert_eq!(
            result.final_answer,
            JsonField::Raw("the answer is yes".to_string())
        );
    }

    #[test]
    fn test_fence_stripping_is_exact() {
        // a lone ``` prefix is not the json fence and must not be stripped
        assert_eq!(strip_code_fence("```\n{}\n```"), "```\n{}");
        assert_eq!(strip_code_fence("```json {\"a\":1} ```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_empty_block_defaults_to_empty_object() {
        let result = normalize(&json!({"final_answer": "", "interpretation": ""}));
        assert_eq!(result.final_answer, JsonField::Parsed(json!({})));
        assert_eq!(result.interpretation, JsonField::Parsed(json!({})));
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let result = normalize(&json!({"search_space": "s", "current_step": "completed"}));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value.get("searchSpace").and_then(Value::as_str), Some("s"));
        assert_eq!(value.get("currentStep").and_then(Value::as_str), Some("completed"));
        assert_eq!(value.get("aspProgram").and_then(Value::as_str), Some(""));
        assert!(value.get("finalAnswer").is_some());
    }
}
