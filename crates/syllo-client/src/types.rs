//! Wire types for the reasoning backend API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `/api/reason`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    /// Natural-language question text.
    pub question: String,
    /// Caller-chosen or generated question id.
    pub question_id: String,
    /// Upper bound on answer-set models the solver may return.
    pub max_models: u32,
}

/// Response body for `/api/reason`.
///
/// `result` is deliberately left as raw JSON: its fields are
/// heterogeneous and partially stringified, and normalization belongs to
/// the domain layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    /// Echo of the submitted question id.
    pub question_id: String,
    /// Echo of the question text.
    #[serde(default)]
    pub question: String,
    /// `"success"` or a failure label. A non-success status is a logical
    /// failure even when the transport succeeded.
    pub status: String,
    /// The raw workflow result payload.
    #[serde(default)]
    pub result: Value,
    /// Server-supplied error message, when any.
    #[serde(default)]
    pub error: Option<String>,
    /// Server-side completion timestamp.
    #[serde(default)]
    pub timestamp: String,
}

/// Response body for `/api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status label.
    pub status: String,
    /// Server timestamp.
    #[serde(default)]
    pub timestamp: String,
    /// Whether the reasoning workflow is ready to accept questions.
    #[serde(default)]
    pub workflow_ready: bool,
    /// Backend version string.
    #[serde(default)]
    pub version: String,
    /// Per-service status.
    #[serde(default)]
    pub services: ServiceStatus,
}

/// Status labels of the backend's constituent services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// ASP solver status label.
    #[serde(default)]
    pub asp_solver: String,
    /// LLM service status label.
    #[serde(default)]
    pub llm_service: String,
}
