//! Reasoning client implementation.

use crate::error::ClientError;
use crate::types::{HealthResponse, QuestionRequest, QuestionResponse};
use std::time::Duration;
use tracing::debug;

/// Default backend endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Default request timeout (5 minutes; reasoning runs are slow).
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Default upper bound on solver models per question.
pub const DEFAULT_MAX_MODELS: u32 = 10;

const REASON_PATH: &str = "/api/reason";
const HEALTH_PATH: &str = "/api/health";

/// HTTP client for the reasoning backend.
///
/// Each question is a single request with a fixed timeout. There is no
/// retry and no client-side queueing; callers issue at most one request
/// per interaction.
pub struct ReasoningClient {
    base_url: String,
    max_models: u32,
    http: reqwest::Client,
}

impl ReasoningClient {
    /// Create a client with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.into(),
            max_models: DEFAULT_MAX_MODELS,
            http,
        }
    }

    /// Set the model bound sent with each question.
    pub fn with_max_models(mut self, max_models: u32) -> Self {
        self.max_models = max_models;
        self
    }

    /// The configured backend endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a question and wait for the completed workflow response.
    ///
    /// A `question_id` is generated when the caller passes none. Returns
    /// an error for transport failures, HTTP error codes, and responses
    /// whose `status` is not `"success"`; in the last case the
    /// server-supplied message is carried when present.
    pub async fn submit_question(
        &self,
        question: &str,
        question_id: Option<String>,
    ) -> Result<QuestionResponse, ClientError> {
        let request = QuestionRequest {
            question: question.to_string(),
            question_id: question_id.unwrap_or_else(generate_question_id),
            max_models: self.max_models,
        };
        let url = format!("{}{}", self.base_url, REASON_PATH);
        debug!(question_id = %request.question_id, %url, "submitting reasoning request");

        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ClientError::Server(format!("HTTP {}: {}", status, body)));
        }

        let response: QuestionResponse = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        debug!(question_id = %response.question_id, status = %response.status, "reasoning response received");

        if response.status != "success" {
            let message = response
                .error
                .clone()
                .unwrap_or_else(|| format!("reasoning failed with status '{}'", response.status));
            return Err(ClientError::Server(message));
        }

        Ok(response)
    }

    /// Query backend health.
    pub async fn check_health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        debug!(%url, "checking backend health");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Server(format!("HTTP {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

/// Generate a fresh question id (`q_<uuidv7>`).
pub fn generate_question_id() -> String {
    format!("q_{}", uuid::Uuid::now_v7().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = ReasoningClient::new(DEFAULT_ENDPOINT);
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.max_models, DEFAULT_MAX_MODELS);
    }

    #[test]
    fn test_with_max_models() {
        let client = ReasoningClient::new(DEFAULT_ENDPOINT).with_max_models(3);
        assert_eq!(client.max_models, 3);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = generate_question_id();
        let b = generate_question_id();
        assert!(a.starts_with("q_"));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_network_error() {
        // nothing listens on port 9 (discard) on loopback
        let client =
            ReasoningClient::with_timeout("http://127.0.0.1:9", Duration::from_secs(2));
        let result = client.submit_question("test", None).await;

        match result {
            Err(ClientError::Network(_)) | Err(ClientError::Timeout) => {}
            Err(other) => panic!("expected a transport failure, got {}", other),
            Ok(response) => panic!("unexpected success: {}", response.status),
        }
    }
}
