//! Health command implementation.

use crate::error::Result;
use crate::output::Formatter;
use syllo_client::ReasoningClient;

/// Execute the health command.
pub async fn execute_health(client: &ReasoningClient, formatter: &Formatter) -> Result<()> {
    let health = client.check_health().await?;

    if health.status == "healthy" && health.workflow_ready {
        println!("{}", formatter.success(&format!("Backend healthy ({})", client.base_url())));
    } else {
        println!(
            "{}",
            formatter.warning(&format!(
                "Backend status '{}', workflow ready: {}",
                health.status, health.workflow_ready
            ))
        );
    }

    if !health.version.is_empty() {
        println!("  version:     {}", health.version);
    }
    if !health.services.asp_solver.is_empty() {
        println!("  asp_solver:  {}", health.services.asp_solver);
    }
    if !health.services.llm_service.is_empty() {
        println!("  llm_service: {}", health.services.llm_service);
    }

    Ok(())
}
