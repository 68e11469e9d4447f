//! Command implementations.

pub mod ask;
pub mod export;
pub mod health;
pub mod history;

pub use self::ask::execute_ask;
pub use self::export::execute_export;
pub use self::health::execute_health;
pub use self::history::execute_history;

use crate::config::Config;
use std::time::Duration;
use syllo_client::ReasoningClient;

/// Build a backend client from the effective configuration.
pub fn build_client(config: &Config) -> ReasoningClient {
    ReasoningClient::with_timeout(&config.endpoint, Duration::from_secs(config.timeout_secs))
        .with_max_models(config.max_models)
}
