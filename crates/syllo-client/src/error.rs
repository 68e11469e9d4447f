//! Error types for the backend client.

use thiserror::Error;

/// Client operation errors.
///
/// Only two kinds cross to the user: transport failures and
/// server-reported failures. Parsing problems inside the workflow payload
/// never surface here; they are absorbed during normalization.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response received (connection, DNS, request build).
    #[error("Network connection failed: {0}")]
    Network(String),

    /// The fixed wait bound elapsed before a response arrived.
    #[error("Request timed out")]
    Timeout,

    /// HTTP error code or a logical failure reported by the server.
    #[error("Server error: {0}")]
    Server(String),

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_decode() {
            ClientError::InvalidResponse(e.to_string())
        } else if e.is_status() {
            match e.status() {
                Some(status) => ClientError::Server(format!("HTTP {}: {}", status, e)),
                None => ClientError::Server(e.to_string()),
            }
        } else {
            // connect errors, request build errors, everything transport
            ClientError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::InvalidResponse(e.to_string())
    }
}
