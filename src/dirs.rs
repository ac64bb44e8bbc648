use std::path::PathBuf;

/// Returns the base directory for event log data.
///
/// Uses `$A3S_EVENTLOG_HOME` if set, otherwise defaults to `~/.a3s/eventlog`.
pub fn eventlog_home() -> PathBuf {
    if let Ok(home) = std::env::var("A3S_EVENTLOG_HOME") {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".a3s")
        .join("eventlog")
}

/// Returns the default archive file path.
pub fn archive_path() -> PathBuf {
    eventlog_home().join("archive.json")
}

/// Returns the path to the user configuration file.
pub fn config_path() -> PathBuf {
    eventlog_home().join("config.toml")
}
