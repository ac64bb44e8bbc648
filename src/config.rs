use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dirs;
use crate::error::{EventLogError, Result};
use crate::pipeline::DEFAULT_MAX_BATCH_SIZE;

/// User-configurable settings for the event log server and CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogConfig {
    /// Host address for the HTTP server (default: 127.0.0.1)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for the HTTP server (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Archive file holding all accepted events
    #[serde(default = "dirs::archive_path")]
    pub archive_path: PathBuf,

    /// Maximum number of records accepted in one insert batch
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Largest `size` a list request may ask for
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// `size` used when a list request does not give one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_batch_size() -> usize {
    DEFAULT_MAX_BATCH_SIZE
}

fn default_max_page_size() -> usize {
    1000
}

fn default_page_size() -> usize {
    10
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            archive_path: dirs::archive_path(),
            max_batch_size: default_max_batch_size(),
            max_page_size: default_max_page_size(),
            default_page_size: default_page_size(),
        }
    }
}

impl EventLogConfig {
    /// Load configuration from the default config file path.
    /// Returns default config if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = dirs::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EventLogError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: EventLogConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the current configuration to the default config file path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&dirs::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject limits that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        if self.max_batch_size == 0 {
            return Err(EventLogError::Config(
                "max_batch_size must be >= 1".to_string(),
            ));
        }
        if self.max_page_size == 0 {
            return Err(EventLogError::Config(
                "max_page_size must be >= 1".to_string(),
            ));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(EventLogError::Config(format!(
                "default_page_size must be between 1 and {}",
                self.max_page_size
            )));
        }
        Ok(())
    }

    /// Returns the server bind address string (e.g., "127.0.0.1:8000").
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
