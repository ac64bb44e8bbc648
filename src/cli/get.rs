use crate::error::Result;
use crate::service::EventLogService;

/// Execute the `get` command: print one archived event as JSON.
pub async fn execute(service: &EventLogService, event_id: &str) -> Result<()> {
    let event = service.return_log(event_id).await?;
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}
