use crate::config::EventLogConfig;
use crate::error::Result;
use crate::server;

/// Execute the `serve` command: start the HTTP server.
pub async fn execute(
    mut config: EventLogConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    // Override config with CLI arguments
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    println!("A3S EventLog server starting...");
    println!("Listening on http://{}", config.bind_address());
    println!("Archive: {}", config.archive_path.display());
    println!("Press Ctrl+C to stop");

    server::start(config).await
}
