use std::sync::Arc;

use crate::config::EventLogConfig;
use crate::service::EventLogService;

/// Shared application state accessible to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventLogService>,
    pub config: Arc<EventLogConfig>,
}

impl AppState {
    pub fn new(service: Arc<EventLogService>, config: Arc<EventLogConfig>) -> Self {
        Self { service, config }
    }
}
