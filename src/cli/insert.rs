use std::path::Path;

use serde_json::Value;

use crate::error::{EventLogError, Result};
use crate::service::EventLogService;

/// Execute the `insert` command: archive the records of a JSON array file.
pub async fn execute(service: &EventLogService, file: &Path) -> Result<()> {
    let content = tokio::fs::read_to_string(file).await.map_err(|e| {
        EventLogError::InvalidRequest(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let records: Vec<Value> = serde_json::from_str(&content).map_err(|e| {
        EventLogError::InvalidRequest(format!(
            "{} must hold a JSON array of events: {}",
            file.display(),
            e
        ))
    })?;

    let results = service.insert_logs(records).await?;
    let accepted = results.iter().filter(|r| r.success).count();

    println!("{}", serde_json::to_string_pretty(&results)?);
    println!("\n{} accepted, {} rejected", accepted, results.len() - accepted);
    Ok(())
}
