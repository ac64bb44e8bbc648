use crate::error::Result;
use crate::service::EventLogService;

/// Execute the `list` command: print the first `size` archived events.
pub async fn execute(service: &EventLogService, size: usize) -> Result<()> {
    let events = service.return_logs(size).await?;

    if events.is_empty() {
        println!("No events archived.");
        println!("Use `a3s-eventlog insert <file>` to add events.");
        return Ok(());
    }

    println!("{:<20} {:<8} {:<26} OPERATION", "EVENT ID", "TYPE", "TIMESTAMP");
    for event in &events {
        println!(
            "{:<20} {:<8} {:<26} {}",
            event.event_id,
            event.kind(),
            event.timestamp.to_rfc3339(),
            event.event.operation(),
        );
    }

    println!("\n{} event(s) shown", events.len());
    Ok(())
}
