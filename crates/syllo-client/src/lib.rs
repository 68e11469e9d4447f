//! Syllo Backend Client
//!
//! HTTP client for the logic-reasoning backend. The backend exposes two
//! endpoints consumed here: `/api/reason` for submitting a question and
//! `/api/health` for service status. One request, one fixed timeout, no
//! retries; the response payload is handed back raw for normalization by
//! `syllo-domain`.
//!
//! # Example
//!
//! ```no_run
//! use syllo_client::ReasoningClient;
//!
//! # async fn run() -> Result<(), syllo_client::ClientError> {
//! let client = ReasoningClient::new("http://localhost:8000");
//! let response = client.submit_question("All A are B. Is A a B?", None).await?;
//! println!("{}: {}", response.question_id, response.result);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod types;

pub use client::{
    generate_question_id, ReasoningClient, DEFAULT_ENDPOINT, DEFAULT_MAX_MODELS,
    DEFAULT_TIMEOUT_SECS,
};
pub use error::ClientError;
pub use types::{HealthResponse, QuestionRequest, QuestionResponse, ServiceStatus};
