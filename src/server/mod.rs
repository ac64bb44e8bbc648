pub mod router;
pub mod state;

use std::sync::Arc;

use crate::archive::FileArchiveStore;
use crate::config::EventLogConfig;
use crate::error::{EventLogError, Result};
use crate::service::EventLogService;

/// Start the HTTP server with the given configuration.
pub async fn start(config: EventLogConfig) -> Result<()> {
    config.validate()?;

    let store = FileArchiveStore::open(&config.archive_path).await?;
    let service = EventLogService::with_max_batch_size(Arc::new(store), config.max_batch_size);
    tracing::info!(
        path = %config.archive_path.display(),
        store = service.store_name(),
        "Opened event archive"
    );

    let bind_addr = config.bind_address();
    let app_state = state::AppState::new(Arc::new(service), Arc::new(config));

    let app = router::build(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| EventLogError::Server(format!("Failed to bind to {bind_addr}: {e}")))?;

    tracing::info!("Server listening on {bind_addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| EventLogError::Server(format!("Server error: {e}")))?;

    Ok(())
}
