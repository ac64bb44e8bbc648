pub mod get;
pub mod insert;
pub mod list;
pub mod serve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::archive::FileArchiveStore;
use crate::config::EventLogConfig;
use crate::error::Result;
use crate::service::EventLogService;

/// A3S EventLog - Validated, append-only event log archive
#[derive(Debug, Parser)]
#[command(name = "a3s-eventlog", version, about)]
pub struct Cli {
    /// Path to a config file (defaults to $A3S_EVENTLOG_HOME/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Archive file to use instead of the configured one
    #[arg(long, global = true)]
    pub archive: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the first archived events
    List {
        /// Number of events to print
        #[arg(long)]
        size: Option<usize>,
    },

    /// Print a single archived event
    Get {
        /// Event id to look up
        event_id: String,
    },

    /// Validate and archive a JSON array of events from a file
    Insert {
        /// File holding a JSON array of event records
        file: PathBuf,
    },
}

/// Resolve configuration from an optional explicit file and archive override.
pub fn resolve_config(config: Option<&Path>, archive: Option<&Path>) -> Result<EventLogConfig> {
    let mut resolved = match config {
        Some(path) => EventLogConfig::load_from(path)?,
        None => EventLogConfig::load()?,
    };
    if let Some(archive) = archive {
        resolved.archive_path = archive.to_path_buf();
    }
    Ok(resolved)
}

/// Open the configured archive and wrap it in a service.
pub async fn open_service(config: &EventLogConfig) -> Result<EventLogService> {
    let store = FileArchiveStore::open(&config.archive_path).await?;
    Ok(EventLogService::with_max_batch_size(
        Arc::new(store),
        config.max_batch_size,
    ))
}
